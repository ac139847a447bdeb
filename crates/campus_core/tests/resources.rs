use campus_core::{
    infer_kind_from_filename, ordered_resources, presentation_for, Presentation, Resource,
    ResourceKind,
};

fn resource(id: &str, name: &str, kind: ResourceKind, order: u32) -> Resource {
    Resource {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        order,
        locator: format!("https://storage.example.com/{id}"),
    }
}

#[test]
fn resources_sort_ascending_by_order() {
    let input = vec![
        resource("r2", "Advanced topics", ResourceKind::Pdf, 2),
        resource("r1", "Getting started", ResourceKind::Video, 1),
        resource("r3", "Wrap-up", ResourceKind::Text, 3),
    ];

    let ordered = ordered_resources(&input);
    let ids: Vec<&str> = ordered.iter().map(|resource| resource.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2", "r3"]);
}

#[test]
fn equal_orders_keep_insertion_order() {
    let input = vec![
        resource("first", "A", ResourceKind::Video, 5),
        resource("second", "B", ResourceKind::Pdf, 5),
        resource("early", "C", ResourceKind::Text, 1),
        resource("third", "D", ResourceKind::Pdf, 5),
    ];

    let ordered = ordered_resources(&input);
    let ids: Vec<&str> = ordered.iter().map(|resource| resource.id.as_str()).collect();
    assert_eq!(ids, ["early", "first", "second", "third"]);
}

#[test]
fn ordering_is_idempotent_and_leaves_input_untouched() {
    let input = vec![
        resource("r2", "B", ResourceKind::Pdf, 2),
        resource("r1", "A", ResourceKind::Video, 1),
    ];
    let snapshot = input.clone();

    let once = ordered_resources(&input);
    let twice = ordered_resources(&once);

    assert_eq!(once, twice);
    assert_eq!(input, snapshot);
}

#[test]
fn every_known_kind_has_exactly_one_presentation() {
    assert_eq!(
        presentation_for(&ResourceKind::Video),
        Presentation::InlinePlayer
    );
    assert_eq!(
        presentation_for(&ResourceKind::Pdf),
        Presentation::InlineFrame
    );
    assert_eq!(
        presentation_for(&ResourceKind::WordDocument),
        Presentation::DownloadOnly
    );
    assert_eq!(
        presentation_for(&ResourceKind::SlideDeck),
        Presentation::DownloadOnly
    );
    assert_eq!(
        presentation_for(&ResourceKind::Text),
        Presentation::DownloadOnly
    );
}

#[test]
fn unknown_kinds_fail_closed_to_download() {
    let kind = ResourceKind::from_wire("hologram");
    assert_eq!(kind, ResourceKind::Other("hologram".to_string()));
    assert_eq!(presentation_for(&kind), Presentation::DownloadOnly);
}

#[test]
fn extension_inference_follows_the_upload_table() {
    let cases = [
        ("intro.mp4", Some(ResourceKind::Video)),
        ("syllabus.pdf", Some(ResourceKind::Pdf)),
        ("notes.docx", Some(ResourceKind::WordDocument)),
        ("notes.doc", Some(ResourceKind::WordDocument)),
        ("slides.pptx", Some(ResourceKind::SlideDeck)),
        ("slides.ppt", Some(ResourceKind::SlideDeck)),
        ("readme.txt", Some(ResourceKind::Text)),
        ("archive.zip", None),
        ("no-extension", None),
    ];
    for (file_name, expected) in cases {
        assert_eq!(
            infer_kind_from_filename(file_name),
            expected,
            "file {file_name}"
        );
    }
}

#[test]
fn extension_inference_is_case_insensitive() {
    assert_eq!(
        infer_kind_from_filename("LECTURE.MP4"),
        Some(ResourceKind::Video)
    );
    assert_eq!(
        infer_kind_from_filename("Slides.PpTx"),
        Some(ResourceKind::SlideDeck)
    );
}

#[test]
fn wire_round_trip_covers_the_closed_enumeration() {
    for raw in ["video", "pdf", "word-document", "slide-deck", "text"] {
        assert_eq!(ResourceKind::from_wire(raw).as_wire(), raw);
    }
}
