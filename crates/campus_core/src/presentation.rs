use crate::ResourceKind;

/// How a resource is presented to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Play the content inline (video).
    InlinePlayer,
    /// Embed the content in an inline frame (pdf).
    InlineFrame,
    /// Offer the content as a download only.
    DownloadOnly,
}

/// Total mapping from resource kind to presentation mode. Kinds the server
/// introduces ahead of client support fail closed to `DownloadOnly`.
pub fn presentation_for(kind: &ResourceKind) -> Presentation {
    match kind {
        ResourceKind::Video => Presentation::InlinePlayer,
        ResourceKind::Pdf => Presentation::InlineFrame,
        ResourceKind::WordDocument | ResourceKind::SlideDeck | ResourceKind::Text => {
            Presentation::DownloadOnly
        }
        ResourceKind::Other(_) => Presentation::DownloadOnly,
    }
}

/// Upload-time kind default for a chosen file, from its extension.
pub fn infer_kind_from_filename(file_name: &str) -> Option<ResourceKind> {
    let (_, extension) = file_name.rsplit_once('.')?;
    ResourceKind::from_extension(extension)
}
