use crate::core::games::GameSource;
use crate::models::game::{GameRow, SENTINEL_TITLE_ID};
use crate::models::remote::ShaderCounts;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Builds the rows of one installation's game list.
///
/// The sentinel title is dropped, rows are sorted by name and then narrowed by
/// `filter` (case-insensitive substring). Shader downloads are offered only when
/// the remote has more shaders than the local cache. Sharing is never offered.
pub fn present(
    title_ids: &[String],
    source: &impl GameSource,
    remote_counts: &ShaderCounts,
    filter: Option<&str>,
) -> Vec<GameRow> {
    let needle = filter
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let mut named: Vec<(String, &String)> = title_ids
        .iter()
        .filter(|id| id.as_str() != SENTINEL_TITLE_ID)
        .map(|id| (source.display_name(id), id))
        .collect();

    named.sort_by(|(a_name, a_id), (b_name, b_id)| {
        compare_names(a_name, b_name).then_with(|| a_id.cmp(b_id))
    });

    named
        .into_iter()
        .filter(|(name, _)| {
            needle
                .as_ref()
                .map(|n| name.to_lowercase().contains(n.as_str()))
                .unwrap_or(true)
        })
        .map(|(name, title_id)| {
            let local = source.local_shader_count(title_id);
            let remote = remote_counts
                .get(title_id)
                .or_else(|| remote_counts.get(&title_id.to_uppercase()))
                .copied()
                .unwrap_or(0);

            GameRow {
                title_id: title_id.clone(),
                display_id: title_id.to_uppercase(),
                name,
                local_shader_count: local,
                remote_shader_count: remote,
                can_download_shaders: remote > local,
                can_share_shaders: false,
            }
        })
        .collect()
}

/// Locale-style ordering: accents and case are ignored first, then accents
/// break ties, then case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lower-case base letters with combining marks dropped: "Ōkami" -> "okami".
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
