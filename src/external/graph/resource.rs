//! Resource path resolver.
//!
//! Change notifications carry a resource path such as
//! `Users/{user-id}/Messages/{message-id}`. This module extracts the two
//! identifiers without validating their format.

/// Extract user id and message id from a notification resource path.
///
/// Scans `/`-separated segments for one case-insensitively equal to `users`
/// (the following segment is the user id) and one equal to `messages` (the
/// following segment is the message id). Segments may appear in any order;
/// absent segments yield `None`. A repeated segment name keeps the last
/// occurrence.
pub fn parse_resource_path(resource: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = resource.split('/').collect();
    let mut user_id = None;
    let mut message_id = None;

    for (i, part) in parts.iter().enumerate() {
        if part.eq_ignore_ascii_case("users") && i + 1 < parts.len() {
            user_id = Some(parts[i + 1].to_string());
        } else if part.eq_ignore_ascii_case("messages") && i + 1 < parts.len() {
            message_id = Some(parts[i + 1].to_string());
        }
    }

    (user_id, message_id)
}
