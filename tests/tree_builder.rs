//! Tree Builder Integration Tests
//!
//! Tests for the skip-versus-abort failure policies, attachment ordering,
//! and the shape of nested output trees.

use content_chef::adapters::{LicenseError, StandardLicenses};
use content_chef::core::{AttachError, BuildError, BuiltTree, PathResolver, TreeBuilder};
use content_chef::domain::{
    channel_id, domain_namespace, Attachment, ContentKind, FileDescriptor, FileRole, SourceNode,
};

const DOMAIN: &str = "www.designmate.com";

fn build(sources: &[SourceNode]) -> Result<BuiltTree, BuildError> {
    let resolver = PathResolver::new("/srv/content");
    let licenses = StandardLicenses;
    let builder = TreeBuilder::new(domain_namespace(DOMAIN), &resolver, &licenses);
    builder.build(&channel_id(DOMAIN, "designmate"), sources)
}

fn video(id: &str, files: Vec<FileDescriptor>) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        title: format!("Video {}", id),
        license: Some("All Rights Reserved".to_string()),
        copyright_holder: Some("Designmate Ind.Pvt.Ltd.".to_string()),
        files,
        ..Default::default()
    }
}

fn topic(id: &str, children: Vec<SourceNode>) -> SourceNode {
    SourceNode {
        id: id.to_string(),
        title: format!("Topic {}", id),
        children,
        ..Default::default()
    }
}

fn roles(attachments: &[Attachment]) -> Vec<FileRole> {
    attachments.iter().map(Attachment::role).collect()
}

#[test]
fn test_malformed_middle_sibling_is_omitted() {
    let sources = vec![
        video("first", vec![FileDescriptor::from_path("a.mp4")]),
        video("middle", vec![FileDescriptor::from_path("x.docx")]),
        video("last", vec![FileDescriptor::from_path("c.mp4")]),
    ];

    let tree = build(&sources).unwrap();

    let ids: Vec<_> = tree.children.iter().map(|c| c.source_id()).collect();
    assert_eq!(ids, vec!["first", "last"]);
    assert_eq!(tree.skipped.len(), 1);
    assert_eq!(tree.skipped[0].id, "middle");
    assert!(tree.skipped[0].reason.contains("docx"));
}

#[test]
fn test_malformed_topic_drops_whole_subtree() {
    // A topic whose first file has an unknown extension is skipped with
    // all of its children, even valid ones.
    let inner = video("inner", vec![FileDescriptor::from_path("a.mp4")]);
    let mut broken = topic("broken", vec![inner]);
    broken.files = vec![FileDescriptor::from_path("cover.docx")];

    let sources = vec![broken, video("sibling", vec![FileDescriptor::from_path("b.mp4")])];
    let tree = build(&sources).unwrap();

    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].source_id(), "sibling");
}

#[test]
fn test_youtube_entry_yields_two_attachments() {
    for high_resolution in [None, Some(true), Some(false)] {
        let file = FileDescriptor {
            high_resolution,
            ..FileDescriptor::from_youtube_id("abc123")
        };
        let tree = build(&[video("yt", vec![file])]).unwrap();

        let leaf = &tree.children[0];
        assert_eq!(leaf.kind(), ContentKind::Video);

        let files = leaf.files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].role(), FileRole::YouTubeVideo);
        assert_eq!(files[0].source(), "abc123");
        assert_eq!(files[1].role(), FileRole::Subtitle);
        assert_eq!(files[1].language(), Some("en"));
    }
}

#[test]
fn test_video_attachments_keep_input_order() {
    let sources = vec![video(
        "clip",
        vec![FileDescriptor::from_path("clip.mp4"), FileDescriptor::from_path("thumb.jpg")],
    )];

    let tree = build(&sources).unwrap();
    assert_eq!(roles(tree.children[0].files()), vec![FileRole::Video, FileRole::Thumbnail]);
}

#[test]
fn test_unrecognized_file_aborts_entire_build() {
    let sources = vec![
        video("good", vec![FileDescriptor::from_path("a.mp4")]),
        topic(
            "nested",
            vec![video(
                "bad",
                vec![FileDescriptor::from_path("clip.mp4"), FileDescriptor::from_path("notes.txt")],
            )],
        ),
        video("never-reached", vec![FileDescriptor::from_path("c.mp4")]),
    ];

    let err = build(&sources).unwrap_err();
    match err {
        BuildError::File { node_id, error } => {
            assert_eq!(node_id, "bad");
            assert_eq!(
                error,
                AttachError::UnrecognizedFileType {
                    identifier: "notes.txt".to_string(),
                    kind: ContentKind::Video,
                }
            );
        }
        other => panic!("Expected file error, got {:?}", other),
    }
}

#[test]
fn test_missing_license_aborts() {
    let mut unlicensed = video("clip", vec![FileDescriptor::from_path("a.mp4")]);
    unlicensed.license = None;

    let err = build(&[unlicensed]).unwrap_err();
    assert!(matches!(
        err,
        BuildError::License {
            error: LicenseError::Missing,
            ..
        }
    ));
}

#[test]
fn test_nested_topics_preserve_chain() {
    let leaf = video("leaf", vec![FileDescriptor::from_path("content://deep/leaf.mp4")]);
    let sources = vec![topic(
        "level1",
        vec![topic("level2", vec![topic("level3", vec![leaf])])],
    )];

    let tree = build(&sources).unwrap();
    assert_eq!(tree.children.len(), 1);

    let level1 = &tree.children[0];
    let level2 = level1.child("level2").unwrap();
    let level3 = level2.child("level3").unwrap();
    let leaf = level3.child("leaf").unwrap();

    for container in [level1, level2, level3] {
        assert_eq!(container.kind(), ContentKind::Topic);
        assert_eq!(container.children().len(), 1);
        assert!(container.files().is_empty());
    }
    assert_eq!(leaf.kind(), ContentKind::Video);
    assert!(leaf.children().is_empty());
    assert_eq!(leaf.files()[0].source(), "/srv/content/deep/leaf.mp4");
}

#[test]
fn test_node_ids_follow_placement() {
    let shared = || video("shared", vec![FileDescriptor::from_path("a.mp4")]);
    let sources = vec![shared(), topic("t", vec![shared()])];

    let first = build(&sources).unwrap();
    let second = build(&sources).unwrap();
    assert_eq!(first, second);

    let direct = &first.children[0];
    let nested = first.children[1].child("shared").unwrap();
    assert_eq!(direct.header.content_id, nested.header.content_id);
    assert_ne!(direct.header.node_id, nested.header.node_id);
}

#[test]
fn test_output_is_finite_tree() {
    let hosted = video("c", vec![FileDescriptor::from_web_url("https://vimeo.com/1")]);
    let sources = vec![topic("a", vec![topic("b", vec![]), hosted])];
    let tree = build(&sources).unwrap();

    // Each node is reachable exactly once walking down from the root
    let mut seen = std::collections::HashSet::new();
    let mut stack: Vec<_> = tree.children.iter().collect();
    while let Some(node) = stack.pop() {
        assert!(seen.insert(node.header.node_id));
        stack.extend(node.children());
    }
    assert_eq!(seen.len(), 3);
}
