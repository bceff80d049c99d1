use std::fmt::Display;

use itertools::Itertools;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::tree_queue::Levels;
use crate::tree_traits::TreeNode;

const BAR: &str = "|   ";
const GAP: &str = "    ";
const BRANCH: &str = "|---";
const LAST_BRANCH: &str = "\\---";

/// One line per level: `"[<depth>] <entry> <entry> ..."`.
///
/// Empty slots show up as the placeholder, so every slot of every visited node
/// takes a position. An empty tree yields the single empty notice line.
#[instrument(level = "trace", skip_all)]
pub fn level_order_lines<N>(root: Option<&N>, settings: &RenderSettings) -> Vec<String>
where
    N: TreeNode,
    N::Value: Display,
{
    if root.is_none() {
        return vec![settings.empty_notice.clone()];
    }

    Levels::new(root)
        .enumerate()
        .map(|(depth, level)| {
            let entries = level
                .iter()
                .map(|entry| match entry {
                    Some(node) => node.value().to_string(),
                    None => settings.placeholder.clone(),
                })
                .join(" ");
            format!("[{depth}] {entries}")
        })
        .collect()
}

/// Directory-style drawing, pre-order, one node per line.
///
/// ```text
/// 2
/// |---105
/// |   |---101
/// |   \---101
/// \---105
///     \---10101
/// ```
///
/// An empty root draws as the absent marker.
#[instrument(level = "trace", skip_all)]
pub fn render_visual<N>(root: Option<&N>, settings: &RenderSettings) -> String
where
    N: TreeNode,
    N::Value: Display,
{
    let mut out = String::new();
    draw(root, &[], settings, &mut out);
    out
}

/// `ancestors[d]` tells whether the ancestor at depth `d + 1` still has
/// siblings left to draw below it.
fn draw<N>(node: Option<&N>, ancestors: &[bool], settings: &RenderSettings, out: &mut String)
where
    N: TreeNode,
    N::Value: Display,
{
    let Some(node) = node else {
        out.push_str(&settings.absent_marker);
        out.push('\n');
        return;
    };

    out.push_str(&node.value().to_string());
    out.push('\n');

    let children: Vec<Option<&N>> = if settings.ignore_absent {
        node.valid_children().into_iter().map(Some).collect()
    } else {
        node.children()
    };

    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        for &more in ancestors {
            out.push_str(if more { BAR } else { GAP });
        }
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        draw(child, &[ancestors, &[!is_last][..]].concat(), settings, out);
    }
}
