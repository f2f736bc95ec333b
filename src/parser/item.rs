use crate::domain::ItemDraft;
use crate::parser::sanitize::{sanitize_text, to_date};
use crate::xml::XmlValue;

/// Extracts a candidate item from one raw feed node. Every lookup tolerates
/// missing keys and unexpected shapes; validation happens afterwards.
pub fn extract_item(node: &XmlValue) -> ItemDraft {
    ItemDraft {
        title: sanitize_text(node.get("title").and_then(XmlValue::text)),
        description: node
            .get("description")
            .and_then(XmlValue::text)
            .map(str::to_string),
        published: to_date(node.get("pubDate").and_then(XmlValue::text)),
        link: node.get("link").and_then(XmlValue::text).map(str::to_string),
        image_url: extract_image(node),
    }
}

/// Cover image lookup. RSS extensions disagree on where the image lives, so
/// progressively less standard locations are checked and the first non-empty
/// hit wins:
///
/// 1. a direct `image` field,
/// 2. `media:content` url attribute,
/// 3. `media:thumbnail` url attribute,
/// 4. `enclosure` url attribute, when its declared MIME type is an image.
fn extract_image(node: &XmlValue) -> Option<String> {
    let direct = node
        .get("image")
        .and_then(XmlValue::text)
        .filter(|url| !url.is_empty());
    if let Some(url) = direct {
        return Some(url.to_string());
    }

    for key in ["media:content", "media:thumbnail"] {
        let url = node
            .get(key)
            .and_then(|media| media.attr("url"))
            .filter(|url| !url.is_empty());
        if let Some(url) = url {
            return Some(url.to_string());
        }
    }

    let enclosure = node.get("enclosure")?;
    if enclosure.attr("type").unwrap_or("").starts_with("image/") {
        return enclosure
            .attr("url")
            .filter(|url| !url.is_empty())
            .map(str::to_string);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    fn item_node(inner: &str) -> XmlValue {
        let tree = decode(&format!("<item>{inner}</item>")).unwrap();
        tree.get("item").unwrap().clone()
    }

    #[test]
    fn test_extracts_all_fields() {
        let node = item_node(
            r#"<title>A &amp; B</title>
               <description>details</description>
               <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>
               <link>https://example.com/a</link>
               <image>https://example.com/a.png</image>"#,
        );
        let draft = extract_item(&node);

        assert_eq!(draft.title.as_deref(), Some("A & B"));
        assert_eq!(draft.description.as_deref(), Some("details"));
        assert!(draft.published.is_some());
        assert_eq!(draft.link.as_deref(), Some("https://example.com/a"));
        assert_eq!(draft.image_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_title_is_sanitized_description_is_not() {
        let node = item_node(
            "<title><![CDATA[<b>Bold</b>  title]]></title>\
             <description><![CDATA[<b>Bold</b> body]]></description>",
        );
        let draft = extract_item(&node);

        assert_eq!(draft.title.as_deref(), Some("Bold title"));
        assert_eq!(draft.description.as_deref(), Some("<b>Bold</b> body"));
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let draft = extract_item(&item_node("<title>only a title</title>"));

        assert!(draft.description.is_none());
        assert!(draft.published.is_none());
        assert!(draft.link.is_none());
        assert!(draft.image_url.is_none());
    }

    #[test]
    fn test_direct_image_beats_media_content() {
        let node = item_node(
            r#"<image>direct.png</image>
               <media:content url="media.png"/>"#,
        );
        assert_eq!(extract_image(&node).as_deref(), Some("direct.png"));
    }

    #[test]
    fn test_media_content_beats_thumbnail() {
        let node = item_node(
            r#"<media:content url="content.png"/>
               <media:thumbnail url="thumb.png"/>"#,
        );
        assert_eq!(extract_image(&node).as_deref(), Some("content.png"));
    }

    #[test]
    fn test_thumbnail_used_when_earlier_locations_missing() {
        let node = item_node(r#"<media:thumbnail url="thumb.png"/>"#);
        assert_eq!(extract_image(&node).as_deref(), Some("thumb.png"));
    }

    #[test]
    fn test_enclosure_requires_image_mime_type() {
        let html = item_node(r#"<enclosure url="page.html" type="text/html"/>"#);
        assert_eq!(extract_image(&html), None);

        let jpeg = item_node(r#"<enclosure url="photo.jpg" type="image/jpeg"/>"#);
        assert_eq!(extract_image(&jpeg).as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn test_enclosure_without_type_is_ignored() {
        let node = item_node(r#"<enclosure url="mystery.bin"/>"#);
        assert_eq!(extract_image(&node), None);
    }

    #[test]
    fn test_empty_media_url_falls_through() {
        let node = item_node(
            r#"<media:content url=""/>
               <media:thumbnail url="thumb.png"/>"#,
        );
        assert_eq!(extract_image(&node).as_deref(), Some("thumb.png"));
    }

    #[test]
    fn test_no_image_anywhere_is_none() {
        let node = item_node("<title>t</title>");
        assert_eq!(extract_image(&node), None);
    }
}
