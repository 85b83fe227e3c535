mod content;
mod lookup;
mod node;

pub use content::FileContent;
pub use lookup::DeploymentLookup;
pub use node::TreeNode;

/// Name of the top-level node holding the deployment's source files.
pub const SOURCE_ROOT: &str = "src";

/// Locate the top-level source node in a deployment file listing.
pub fn find_source_root(nodes: &[TreeNode]) -> Option<&TreeNode> {
    nodes.iter().find(|node| node.name() == SOURCE_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_src_node_among_top_level_entries() {
        let nodes: Vec<TreeNode> = serde_json::from_str(
            r#"[
                {"type": "file", "name": "package.json", "uid": "u1"},
                {"type": "directory", "name": "src", "children": []},
                {"type": "directory", "name": "public", "children": []}
            ]"#,
        )
        .unwrap();

        let root = find_source_root(&nodes).unwrap();
        assert_eq!(root.name(), "src");
    }

    #[test]
    fn missing_src_yields_none() {
        let nodes: Vec<TreeNode> = serde_json::from_str(
            r#"[{"type": "directory", "name": "out", "children": []}]"#,
        )
        .unwrap();

        assert!(find_source_root(&nodes).is_none());
    }
}
