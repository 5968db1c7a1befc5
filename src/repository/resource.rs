use http::Method;

/// Describes how a REST collection is addressed.
///
/// The defaults follow plain RESTful conventions. Backends that do not (an
/// extra query parameter, nested ids, a different verb for updates) override
/// the relevant method instead of the repository.
pub trait Resource: Send + Sync {
    /// The collection uri.
    fn uri(&self) -> String;

    /// The uri of a single item in the collection.
    fn item_uri(&self, id: &str) -> String {
        format!("{}/{}", self.uri(), id)
    }

    /// The verb and uri used to update the item identified by `id`.
    fn update_route(&self, id: &str) -> (Method, String) {
        (Method::PUT, self.item_uri(id))
    }
}

/// A plain RESTful resource path such as `/deepexi-cloud/v1/menus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResource {
    resource: String,
}

impl RestResource {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

impl Resource for RestResource {
    fn uri(&self) -> String {
        self.resource.clone()
    }
}

/// A status sub-resource addressed as `{resource}/status/{id}` which must
/// carry the application id in the query string.
///
/// Updates are POSTed to `{resource}/status/{id}?appId={app_id}`; the id
/// handed to `update` is the application id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResource {
    resource: String,
    id: String,
}

impl StatusResource {
    pub fn new(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            id: id.into(),
        }
    }

    pub fn uri_for_app(&self, app_id: &str) -> String {
        format!("{}?appId={}", self.uri(), urlencoding::encode(app_id))
    }
}

impl Resource for StatusResource {
    fn uri(&self) -> String {
        format!("{}/status/{}", self.resource, self.id)
    }

    fn update_route(&self, app_id: &str) -> (Method, String) {
        (Method::POST, self.uri_for_app(app_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_resource_routes() {
        let resource = RestResource::new("/deepexi-cloud/v1/users");
        assert_eq!(resource.uri(), "/deepexi-cloud/v1/users");
        assert_eq!(resource.item_uri("42"), "/deepexi-cloud/v1/users/42");
        assert_eq!(
            resource.update_route("42"),
            (Method::PUT, "/deepexi-cloud/v1/users/42".to_string())
        );
    }

    #[test]
    fn test_status_resource_routes() {
        let resource = StatusResource::new("/apps", "9");
        assert_eq!(resource.uri(), "/apps/status/9");
        assert_eq!(resource.uri_for_app("console"), "/apps/status/9?appId=console");
        assert_eq!(
            resource.update_route("console"),
            (Method::POST, "/apps/status/9?appId=console".to_string())
        );
    }
}
