//! HTML serialization (innerHTML / outerHTML)

use crate::{DomResult, DomTree, NodeData, NodeId};

/// Elements without end tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text children are written unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

impl DomTree {
    /// Markup of the children of `id`
    pub fn inner_html(&self, id: NodeId) -> DomResult<String> {
        let node = self.node(id)?;
        let raw = node
            .as_element()
            .is_some_and(|e| RAW_TEXT_ELEMENTS.contains(&e.tag.as_str()));
        let mut out = String::new();
        for (child, _) in self.children(id) {
            self.write_node(child, raw, &mut out);
        }
        Ok(out)
    }

    /// Markup of `id` itself and its subtree
    pub fn outer_html(&self, id: NodeId) -> DomResult<String> {
        self.node(id)?;
        let mut out = String::new();
        self.write_node(id, false, &mut out);
        Ok(out)
    }

    fn write_node(&self, id: NodeId, raw_parent: bool, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document | NodeData::Fragment => {
                for (child, _) in self.children(id) {
                    self.write_node(child, false, out);
                }
            }
            NodeData::Text(text) if raw_parent => out.push_str(text),
            NodeData::Text(text) => escape_text(text, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                for attr in elem.attrs.iter() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_attr(&attr.value, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&elem.tag.as_str()) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&elem.tag.as_str());
                for (child, _) in self.children(id) {
                    self.write_node(child, raw, out);
                }
                out.push_str("</");
                out.push_str(&elem.tag);
                out.push('>');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_and_outer_html() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attribute(div, "title", "a \"quoted\" & more").unwrap();
        let b = tree.create_element("b");
        let text = tree.create_text("1 < 2");
        let br = tree.create_element("br");
        tree.append_child(div, b).unwrap();
        tree.append_child(b, text).unwrap();
        tree.append_child(div, br).unwrap();

        assert_eq!(tree.inner_html(div).unwrap(), "<b>1 &lt; 2</b><br>");
        assert_eq!(
            tree.outer_html(div).unwrap(),
            "<div title=\"a &quot;quoted&quot; &amp; more\"><b>1 &lt; 2</b><br></div>"
        );
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let mut tree = DomTree::new();
        let style = tree.create_element("style");
        let css = tree.create_text("a > b { color: red }");
        tree.append_child(style, css).unwrap();
        assert_eq!(tree.inner_html(style).unwrap(), "a > b { color: red }");
    }
}
