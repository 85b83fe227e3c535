use serde::Deserialize;

/// Deployment lookup response. The API returns a large document; only the
/// canonical deployment id is consumed here.
#[derive(Debug, Deserialize)]
pub struct DeploymentLookup {
    id: String,
}

impl DeploymentLookup {
    pub fn into_id(self) -> String {
        self.id
    }
}
