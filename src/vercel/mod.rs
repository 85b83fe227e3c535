//! Vercel REST API client: deployment id resolution, file tree listing and
//! content download. All requests carry the bearer token; list and download
//! endpoints are additionally scoped to a team when one is configured.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::deployment::{DeploymentLookup, FileContent, TreeNode};
use crate::helpers::tree_materializer::ContentSource;
use crate::settings::Settings;

/// Deployment ids are opaque strings carrying this prefix; references that
/// already carry it skip the lookup round-trip entirely.
pub const DEPLOYMENT_ID_PREFIX: &str = "dpl_";

const USER_AGENT: &str = "vercel-source-fetcher/1.0";

pub struct VercelClient {
    http: Client,
    token: String,
    team: Option<String>,
    api_base: Url,
}

impl VercelClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder().build()?;
        let mut api_base = Url::parse(settings.api_base())
            .with_context(|| format!("parse API base URL '{}'", settings.api_base()))?;
        // A custom base may carry a path (e.g. `http://localhost:8080/api`);
        // `join` only keeps it when the base ends with a slash.
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        Ok(Self {
            http,
            token: settings.token().to_string(),
            team: settings.team().map(str::to_string),
            api_base,
        })
    }

    /// Resolve a deployment reference (URL, hostname or opaque id) to the
    /// canonical deployment id. Prefixed ids are returned as-is without
    /// touching the network.
    pub async fn resolve_deployment_id(&self, reference: &str) -> Result<String> {
        if reference.starts_with(DEPLOYMENT_ID_PREFIX) {
            return Ok(reference.to_string());
        }

        let url = self.endpoint(&format!("v13/deployments/{reference}"), false)?;
        let lookup: DeploymentLookup = self
            .get_json(url)
            .await
            .with_context(|| format!("resolve deployment '{reference}'"))?;
        Ok(lookup.into_id())
    }

    /// Top-level nodes of the deployment's file tree, in API response order.
    pub async fn list_files(&self, deployment_id: &str) -> Result<Vec<TreeNode>> {
        let url = self.endpoint(&format!("v6/deployments/{deployment_id}/files"), true)?;
        self.get_json(url)
            .await
            .with_context(|| format!("list files for deployment '{deployment_id}'"))
    }

    /// Raw bytes of a single file, decoded from the upstream base64 envelope.
    pub async fn file_content(&self, deployment_id: &str, uid: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(
            &format!("v7/deployments/{deployment_id}/files/{uid}"),
            true,
        )?;
        let envelope: FileContent = self
            .get_json(url)
            .await
            .with_context(|| format!("download file content '{uid}'"))?;
        envelope
            .decode()
            .with_context(|| format!("decode file content '{uid}'"))
    }

    /// Build the endpoint URL for the base-relative `path`, attaching the
    /// `teamId` query parameter when `team_scoped` and a team is configured.
    fn endpoint(&self, path: &str, team_scoped: bool) -> Result<Url> {
        let mut url = self
            .api_base
            .join(path)
            .with_context(|| format!("join endpoint path '{path}'"))?;
        if team_scoped && let Some(team) = &self.team {
            url.query_pairs_mut().append_pair("teamId", team);
        }
        Ok(url)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, url: Url) -> Result<T> {
        let res = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = res.status();
        if !status.is_success() {
            bail!("HTTP {} for {}", status, url);
        }

        res.json::<T>()
            .await
            .with_context(|| format!("parse JSON from {url}"))
    }
}

/// Couples the client with a resolved deployment id so the tree walk only has
/// to hand over content uids.
pub struct DeploymentFiles<'a> {
    client: &'a VercelClient,
    deployment_id: &'a str,
}

impl<'a> DeploymentFiles<'a> {
    pub fn new(client: &'a VercelClient, deployment_id: &'a str) -> Self {
        Self {
            client,
            deployment_id,
        }
    }
}

#[async_trait]
impl ContentSource for DeploymentFiles<'_> {
    async fn fetch(&self, uid: &str) -> Result<Vec<u8>> {
        self.client.file_content(self.deployment_id, uid).await
    }
}
