use serde::{Deserialize, Serialize};

// Field order is the serialized key order; scanners compare bodies verbatim.

/// Response type for GET / on the test server
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct ServerInfoResponse {
    pub name: String,
    pub version: String,
    pub status: String,
}

/// Response type for GET /health on the test server
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for GET /version on the test server
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct VersionResponse {
    pub version: String,
    pub api_version: String,
    pub build: String,
}

/// Response type for GET / on the flask fixture
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct ServiceResponse {
    pub status: String,
    pub service: String,
}

/// Response type for GET /health on the flask fixture
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct VersionedHealthResponse {
    pub status: String,
    pub version: String,
}

impl ServerInfoResponse {
    pub fn fixture() -> Self {
        ServerInfoResponse {
            name: "Test Server".to_string(),
            version: "1.0".to_string(),
            status: "running".to_string(),
        }
    }
}

impl HealthResponse {
    pub fn fixture() -> Self {
        HealthResponse {
            status: "healthy".to_string(),
        }
    }
}

impl VersionResponse {
    pub fn fixture() -> Self {
        VersionResponse {
            version: "1.0.0".to_string(),
            api_version: "v1".to_string(),
            build: "test".to_string(),
        }
    }
}

impl ServiceResponse {
    pub fn fixture() -> Self {
        ServiceResponse {
            status: "ok".to_string(),
            service: "scanorama-test-flask".to_string(),
        }
    }
}

impl VersionedHealthResponse {
    pub fn fixture() -> Self {
        VersionedHealthResponse {
            status: "healthy".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}
