use serde::Deserialize;

/// One entry of the deployment file listing. The upstream API tags each node
/// with a `type` field; directories nest their children inline, files carry
/// the opaque content handle used to fetch their bytes.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory {
        name: String,
        // Directories without children omit the field entirely.
        #[serde(default)]
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        uid: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } | TreeNode::File { name, .. } => name,
        }
    }

    /// Number of file leaves under this node (a file node counts itself).
    pub fn file_count(&self) -> u64 {
        match self {
            TreeNode::File { .. } => 1,
            TreeNode::Directory { children, .. } => {
                children.iter().map(TreeNode::file_count).sum()
            }
        }
    }
}
