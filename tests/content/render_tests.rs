//! Markdown rendering of fluently built trees.

use pretty_assertions::assert_eq;
use test_case::test_case;
use url::Url;

use chat_content::domain::content::{
    BlockQuote, ChannelMention, ChatList, CodeContainer, ContainerNode, ContentEmbed, Divider,
    Document, Heading, Hyperlink, Image, ListItem, MemberMention, Paragraph, QuoteLine, Render,
};
use chat_content::domain::value_objects::{ChannelRef, Leaf, MarkType, MentionRef, MentionTarget, Text};
use uuid::Uuid;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

// ==========================================================================
// Block Scenarios
// ==========================================================================

#[test]
fn test_paragraph_hello() {
    assert_eq!(Paragraph::from("Hello").render(), "Hello\n");
}

#[test_case(true, "# Title\n" ; "large")]
#[test_case(false, "## Title\n" ; "small")]
fn test_heading(large: bool, expected: &str) {
    assert_eq!(Heading::new(large).append("Title").render(), expected);
}

#[test]
fn test_block_quote_two_lines() {
    let quote = BlockQuote::new().append("a").append("b");
    assert_eq!(quote.render(), "> a\n> b\n");
}

#[test]
fn test_code_container_with_language() {
    let code = CodeContainer::with_language("csharp").append("x=1;");
    assert_eq!(code.render(), "```csharp\nx=1;\n```\n");
}

#[test]
fn test_code_container_unformatted_omits_tag() {
    let code = CodeContainer::with_language("unformatted").append("x=1;");
    assert_eq!(code.render(), "```\nx=1;\n```\n");
}

#[test]
fn test_ordered_list() {
    let list = ChatList::ordered().append("a").append("b");
    assert_eq!(list.render(), "1. a\n2. b\n");
}

#[test]
fn test_divider_ignores_children() {
    let empty = Divider::new().render();
    let with_children = Divider::new().append("ignored").append("also").render();
    assert_eq!(empty, "---\n");
    assert_eq!(with_children, empty);
}

// ==========================================================================
// Nesting
// ==========================================================================

#[test]
fn test_nested_list_adds_one_indent_unit() {
    let flat = ChatList::unordered().append("x").render();
    let nested = ChatList::unordered()
        .append(ChatList::unordered().append("x"))
        .render();

    assert_eq!(flat, "- x\n");
    assert_eq!(nested, format!("    {}", flat));
}

#[test]
fn test_doubly_nested_list_indents_recursively() {
    let list = ChatList::ordered()
        .append("top")
        .append(
            ChatList::unordered()
                .append("mid")
                .append(ChatList::ordered().append("deep")),
        )
        .append("next");

    assert_eq!(
        list.render(),
        "1. top\n    - mid\n        1. deep\n2. next\n"
    );
}

#[test]
fn test_list_item_continuation_lines() {
    let item = ListItem::new().append("first\nsecond");
    let list = ChatList::unordered().append(item);
    assert_eq!(list.render(), "- first\n  second\n");
}

#[test]
fn test_quote_line_with_embedded_newline_is_reprefixed() {
    let quote = BlockQuote::new().append(QuoteLine::new().append("a\nb"));
    assert_eq!(quote.render(), "> a\n> b\n");
}

// ==========================================================================
// Leaves and Inlines
// ==========================================================================

#[test_case(&[MarkType::Bold], "**x**" ; "bold")]
#[test_case(&[MarkType::Italic], "*x*" ; "italic")]
#[test_case(&[MarkType::Strikethrough], "~~x~~" ; "strikethrough")]
#[test_case(&[MarkType::Underline], "__x__" ; "underline")]
#[test_case(&[MarkType::Spoiler], "||x||" ; "spoiler")]
#[test_case(&[MarkType::InlineCode], "`x`" ; "inline code")]
#[test_case(&[MarkType::Bold, MarkType::Italic], "***x***" ; "bold italic")]
#[test_case(&[MarkType::Unknown], "x" ; "unknown mark")]
fn test_leaf_marks(marks: &[MarkType], expected: &str) {
    let leaf = Leaf::with_marks("x", marks.iter().copied());
    assert_eq!(leaf.render(), expected);
}

#[test]
fn test_paragraph_with_mixed_inlines() {
    let channel = ChannelRef {
        id: Uuid::nil(),
        name: Some("general".into()),
    };
    let paragraph = Paragraph::new()
        .append(Text::new(vec![
            Leaf::new("See "),
            Leaf::with_marks("this", [MarkType::Bold]),
            Leaf::new(" "),
        ]))
        .append(Hyperlink::new(url("https://example.com/")).append("link"))
        .append(" in ")
        .append(ChannelMention::new(channel, Text::default()))
        .append(", ")
        .append(MemberMention::new(MentionRef::group(MentionTarget::Everyone), Text::default()));

    assert_eq!(
        paragraph.render(),
        "See **this** [link](https://example.com/) in #general, @everyone\n"
    );
}

#[test]
fn test_mention_never_renders_id() {
    let mention = MemberMention::new(MentionRef::user("EdVMVKR4"), "Ann");
    let rendered = mention.render();
    assert_eq!(rendered, "@Ann");
    assert!(!rendered.contains("EdVMVKR4"));
}

#[test]
fn test_image_and_content_embed() {
    let image = Image::new(url("https://cdn.example.com/a.png")).append("shot");
    let embed = ContentEmbed::new(url("https://example.com/doc"), "Doc");
    assert_eq!(image.render(), "![shot](https://cdn.example.com/a.png)\n");
    assert_eq!(embed.render(), "[Doc](https://example.com/doc)\n");
}

// ==========================================================================
// Documents
// ==========================================================================

#[test]
fn test_document_concatenates_blocks() {
    let document = Document::new()
        .append(Heading::large().append("Plan"))
        .append(ChatList::ordered().append("draft").append("review"))
        .append(Divider::new())
        .append(Paragraph::from("done"));

    assert_eq!(
        document.render(),
        "# Plan\n1. draft\n2. review\n---\ndone\n"
    );
}

#[test]
fn test_removal_then_render() {
    let document = Document::new()
        .append(Paragraph::from("a"))
        .append(Paragraph::from("b"))
        .append(Paragraph::from("c"))
        .remove_at(1)
        .unwrap();
    assert_eq!(document.render(), "a\nc\n");

    let document = document.remove_range(0, 2).unwrap();
    assert!(document.is_empty());
    assert_eq!(document.render(), "");
}

#[test]
fn test_removal_out_of_range_is_an_error() {
    let err = Paragraph::from("a").remove_at(3).unwrap_err();
    assert_eq!(err.to_string(), "Index 3 is out of range for 1 children");
}
