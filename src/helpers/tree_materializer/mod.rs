use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::BoxFuture;
use indicatif::{ProgressBar, ProgressStyle};

use crate::deployment::TreeNode;

/// Produces the raw bytes behind a file node's content handle. The API client
/// implements this; tests substitute an in-memory map.
#[async_trait]
pub trait ContentSource: Sync {
    async fn fetch(&self, uid: &str) -> Result<Vec<u8>>;
}

/// Mirror `node` under `dest`: directories become local directories
/// (idempotent create), files are fetched through `source` and written out,
/// overwriting whatever is already there. Children are visited in the order
/// the API returned them, one at a time; the first error aborts the walk.
pub async fn materialize_tree(
    source: &impl ContentSource,
    node: &TreeNode,
    dest: &Path,
) -> Result<()> {
    let progress = file_progress_bar(node.file_count())?;
    walk(source, node, dest, &progress).await?;
    progress.finish_and_clear();
    Ok(())
}

fn walk<'a, S: ContentSource>(
    source: &'a S,
    node: &'a TreeNode,
    parent: &'a Path,
    progress: &'a ProgressBar,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let full_path = parent.join(node.name());
        match node {
            TreeNode::Directory { children, .. } => {
                fs::create_dir_all(&full_path)
                    .with_context(|| format!("create dir {}", full_path.display()))?;
                for child in children {
                    walk(source, child, &full_path, progress).await?;
                }
            }
            TreeNode::File { name, uid } => {
                progress.set_message(name.clone());
                let bytes = source.fetch(uid).await?;
                fs::write(&full_path, &bytes)
                    .with_context(|| format!("write file {}", full_path.display()))?;
                progress.inc(1);
            }
        }
        Ok(())
    })
}

fn file_progress_bar(total_files: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_files);
    let style = ProgressStyle::with_template(
        "{msg}\n{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} files",
    )
    .context("build progress style")?
    .progress_chars("#>-");
    pb.set_style(style);
    Ok(pb)
}
