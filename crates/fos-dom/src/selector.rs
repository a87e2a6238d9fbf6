//! CSS Selectors
//!
//! Parsing and right-to-left matching for the selector subset used by
//! `querySelector`-style lookups:
//!
//! - type, universal, `#id`, `.class`
//! - attribute selectors: `[a]`, `[a=v]`, `[a~=v]`, `[a|=v]`, `[a^=v]`,
//!   `[a$=v]`, `[a*=v]`, with an optional ` i` flag
//! - pseudo-classes: `:first-child`, `:last-child`, `:only-child`, `:empty`,
//!   `:root`, `:checked`, `:disabled`, `:enabled`, `:not(...)`
//! - combinators: descendant, `>`, `+`, `~`
//! - selector lists separated by `,`

use crate::{DomError, DomResult, DomTree, NodeId};

/// Parsed selector list (`a, b`)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(Vec<ComplexSelector>);

/// Compound selectors joined by combinators, left to right
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    first: Compound,
    rest: Vec<(Combinator, Compound)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

/// Simple selectors that must all match one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    tag: Option<String>,
    parts: Vec<SimpleSelector>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimpleSelector {
    Id(String),
    Class(String),
    Attribute {
        name: String,
        matcher: Option<(AttrOp, String)>,
        ignore_case: bool,
    },
    Pseudo(PseudoClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    Equals,
    Includes,
    DashMatch,
    Prefix,
    Suffix,
    Substring,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    Empty,
    Root,
    Checked,
    Disabled,
    Enabled,
    Not(SelectorList),
}

impl SelectorList {
    /// Parse a selector list
    pub fn parse(input: &str) -> DomResult<Self> {
        let mut parser = Parser {
            src: input,
            pos: 0,
        };
        let list = parser
            .selector_list()
            .ok_or_else(|| DomError::InvalidSelector(input.to_string()))?;
        parser.skip_ws();
        if !parser.at_end() {
            return Err(DomError::InvalidSelector(input.to_string()));
        }
        Ok(list)
    }

    /// Check whether `node` matches any selector in the list
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        tree.element(node).is_ok() && self.0.iter().any(|s| s.matches(tree, node))
    }
}

impl ComplexSelector {
    fn compound(&self, index: usize) -> &Compound {
        if index == 0 {
            &self.first
        } else {
            &self.rest[index - 1].1
        }
    }

    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_at(tree, self.rest.len(), node)
    }

    fn matches_at(&self, tree: &DomTree, index: usize, node: NodeId) -> bool {
        if !self.compound(index).matches(tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }
        let parent_element = |n: NodeId| tree.parent(n).filter(|&p| tree.element(p).is_ok());
        match self.rest[index - 1].0 {
            Combinator::Descendant => {
                let mut cur = parent_element(node);
                while let Some(ancestor) = cur {
                    if self.matches_at(tree, index - 1, ancestor) {
                        return true;
                    }
                    cur = parent_element(ancestor);
                }
                false
            }
            Combinator::Child => {
                parent_element(node).is_some_and(|p| self.matches_at(tree, index - 1, p))
            }
            Combinator::NextSibling => tree
                .previous_element_sibling(node)
                .is_some_and(|s| self.matches_at(tree, index - 1, s)),
            Combinator::SubsequentSibling => {
                let mut cur = tree.previous_element_sibling(node);
                while let Some(sibling) = cur {
                    if self.matches_at(tree, index - 1, sibling) {
                        return true;
                    }
                    cur = tree.previous_element_sibling(sibling);
                }
                false
            }
        }
    }
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.parts.is_empty()
    }

    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Ok(elem) = tree.element(node) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if tag != "*" && !elem.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.parts.iter().all(|part| match part {
            SimpleSelector::Id(id) => elem.id() == Some(id.as_str()),
            SimpleSelector::Class(class) => elem.has_class(class),
            SimpleSelector::Attribute {
                name,
                matcher,
                ignore_case,
            } => match (elem.get_attr(name), matcher) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some((op, expected))) => {
                    attr_matches(*op, actual, expected, *ignore_case)
                }
            },
            SimpleSelector::Pseudo(pseudo) => pseudo_matches(pseudo, tree, node),
        })
    }
}

fn attr_matches(op: AttrOp, actual: &str, expected: &str, ignore_case: bool) -> bool {
    let (actual, expected) = if ignore_case {
        (actual.to_lowercase(), expected.to_lowercase())
    } else {
        (actual.to_string(), expected.to_string())
    };
    match op {
        AttrOp::Equals => actual == expected,
        AttrOp::Includes => {
            !expected.is_empty() && actual.split_ascii_whitespace().any(|w| w == expected)
        }
        AttrOp::DashMatch => {
            actual == expected || actual.starts_with(&format!("{expected}-"))
        }
        AttrOp::Prefix => !expected.is_empty() && actual.starts_with(&expected),
        AttrOp::Suffix => !expected.is_empty() && actual.ends_with(&expected),
        AttrOp::Substring => !expected.is_empty() && actual.contains(&expected),
    }
}

fn pseudo_matches(pseudo: &PseudoClass, tree: &DomTree, node: NodeId) -> bool {
    let has_parent = tree.parent(node).is_some();
    match pseudo {
        PseudoClass::FirstChild => has_parent && tree.previous_element_sibling(node).is_none(),
        PseudoClass::LastChild => has_parent && tree.next_element_sibling(node).is_none(),
        PseudoClass::OnlyChild => {
            has_parent
                && tree.previous_element_sibling(node).is_none()
                && tree.next_element_sibling(node).is_none()
        }
        PseudoClass::Empty => tree
            .children(node)
            .all(|(_, child)| !child.is_element() && child.as_text().is_none_or(str::is_empty)),
        PseudoClass::Root => tree.parent(node) == Some(NodeId::ROOT),
        PseudoClass::Checked => tree.element(node).is_ok_and(|e| {
            let checkable = e.input_type().is_some_and(|t| t.is_checkable());
            (checkable || e.tag == "option") && tree.checked(node).unwrap_or(false)
        }),
        PseudoClass::Disabled => tree.element(node).is_ok_and(|e| e.is_disabled()),
        PseudoClass::Enabled => tree
            .element(node)
            .is_ok_and(|e| e.is_form_control() && !e.is_disabled()),
        PseudoClass::Not(list) => !list.matches(tree, node),
    }
}

/// Recursive-descent selector parser
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning whether any was skipped
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos != start
    }

    fn selector_list(&mut self) -> Option<SelectorList> {
        let mut list = Vec::new();
        loop {
            self.skip_ws();
            list.push(self.complex()?);
            self.skip_ws();
            if !self.eat(',') {
                break;
            }
        }
        Some(SelectorList(list))
    }

    fn complex(&mut self) -> Option<ComplexSelector> {
        let first = self.compound()?;
        let mut rest = Vec::new();
        loop {
            let had_ws = self.skip_ws();
            let combinator = match self.peek() {
                Some('>') => Combinator::Child,
                Some('+') => Combinator::NextSibling,
                Some('~') => Combinator::SubsequentSibling,
                Some(',') | Some(')') | None => break,
                Some(_) if had_ws => Combinator::Descendant,
                Some(_) => return None,
            };
            if combinator != Combinator::Descendant {
                self.bump();
                self.skip_ws();
            }
            rest.push((combinator, self.compound()?));
        }
        Some(ComplexSelector { first, rest })
    }

    fn compound(&mut self) -> Option<Compound> {
        let mut compound = Compound::default();
        if self.eat('*') {
            compound.tag = Some("*".to_string());
        } else if self.peek().is_some_and(is_ident_start) {
            compound.tag = Some(self.ident()?.to_ascii_lowercase());
        }
        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    compound.parts.push(SimpleSelector::Id(self.ident()?));
                }
                Some('.') => {
                    self.bump();
                    compound.parts.push(SimpleSelector::Class(self.ident()?));
                }
                Some('[') => {
                    self.bump();
                    compound.parts.push(self.attribute()?);
                }
                Some(':') => {
                    self.bump();
                    compound.parts.push(SimpleSelector::Pseudo(self.pseudo()?));
                }
                _ => break,
            }
        }
        (!compound.is_empty()).then_some(compound)
    }

    fn attribute(&mut self) -> Option<SimpleSelector> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        let op = match self.bump()? {
            ']' => {
                return Some(SimpleSelector::Attribute {
                    name,
                    matcher: None,
                    ignore_case: false,
                });
            }
            '=' => AttrOp::Equals,
            c @ ('~' | '|' | '^' | '$' | '*') => {
                if !self.eat('=') {
                    return None;
                }
                match c {
                    '~' => AttrOp::Includes,
                    '|' => AttrOp::DashMatch,
                    '^' => AttrOp::Prefix,
                    '$' => AttrOp::Suffix,
                    _ => AttrOp::Substring,
                }
            }
            _ => return None,
        };
        self.skip_ws();
        let value = match self.peek()? {
            quote @ ('"' | '\'') => {
                self.bump();
                self.string(quote)?
            }
            _ => self.ident()?,
        };
        self.skip_ws();
        let mut ignore_case = false;
        if let Some(flag) = self.peek().filter(|c| matches!(c, 'i' | 'I' | 's' | 'S')) {
            self.bump();
            ignore_case = flag.eq_ignore_ascii_case(&'i');
            self.skip_ws();
        }
        if !self.eat(']') {
            return None;
        }
        Some(SimpleSelector::Attribute {
            name,
            matcher: Some((op, value)),
            ignore_case,
        })
    }

    fn pseudo(&mut self) -> Option<PseudoClass> {
        let name = self.ident()?.to_ascii_lowercase();
        let pseudo = match name.as_str() {
            "first-child" => PseudoClass::FirstChild,
            "last-child" => PseudoClass::LastChild,
            "only-child" => PseudoClass::OnlyChild,
            "empty" => PseudoClass::Empty,
            "root" => PseudoClass::Root,
            "checked" => PseudoClass::Checked,
            "disabled" => PseudoClass::Disabled,
            "enabled" => PseudoClass::Enabled,
            "not" => {
                if !self.eat('(') {
                    return None;
                }
                let inner = self.selector_list()?;
                self.skip_ws();
                if !self.eat(')') {
                    return None;
                }
                PseudoClass::Not(inner)
            }
            _ => return None,
        };
        Some(pseudo)
    }

    fn ident(&mut self) -> Option<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                out.push(self.bump()?);
            } else if is_ident_char(c) {
                self.bump();
                out.push(c);
            } else {
                break;
            }
        }
        let valid = !out.is_empty() && !out.starts_with(|c: char| c.is_ascii_digit());
        valid.then_some(out)
    }

    fn string(&mut self, quote: char) -> Option<String> {
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(out),
                '\\' => out.push(self.bump()?),
                c => out.push(c),
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || c == '\\' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// <div id=main class="a b"><p class=x></p><p lang=en-US></p><span></span></div>
    fn sample() -> (DomTree, NodeId, [NodeId; 3]) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attribute(div, "id", "main").unwrap();
        tree.set_attribute(div, "class", "a b").unwrap();
        let p1 = tree.create_element("p");
        tree.set_attribute(p1, "class", "x").unwrap();
        let p2 = tree.create_element("p");
        tree.set_attribute(p2, "lang", "en-US").unwrap();
        let span = tree.create_element("span");
        tree.append_child(NodeId::ROOT, div).unwrap();
        for child in [p1, p2, span] {
            tree.append_child(div, child).unwrap();
        }
        (tree, div, [p1, p2, span])
    }

    fn matches(tree: &DomTree, selector: &str, node: NodeId) -> bool {
        SelectorList::parse(selector).unwrap().matches(tree, node)
    }

    #[test]
    fn test_simple_selectors() {
        let (tree, div, [p1, ..]) = sample();
        assert!(matches(&tree, "div", div));
        assert!(matches(&tree, "DIV", div));
        assert!(matches(&tree, "#main", div));
        assert!(matches(&tree, ".a.b", div));
        assert!(matches(&tree, "*", p1));
        assert!(!matches(&tree, ".a.c", div));
        assert!(matches(&tree, "p.x", p1));
    }

    #[test]
    fn test_combinators() {
        let (tree, _, [p1, p2, span]) = sample();
        assert!(matches(&tree, "div p", p1));
        assert!(matches(&tree, "#main > span", span));
        assert!(matches(&tree, "p + p", p2));
        assert!(!matches(&tree, "p + p", p1));
        assert!(matches(&tree, ".x ~ span", span));
        assert!(!matches(&tree, "span p", p1));
    }

    #[test]
    fn test_attribute_selectors() {
        let (tree, div, [_, p2, _]) = sample();
        assert!(matches(&tree, "[lang]", p2));
        assert!(matches(&tree, "[lang|=en]", p2));
        assert!(matches(&tree, "[lang^='en']", p2));
        assert!(matches(&tree, "[lang$=us i]", p2));
        assert!(!matches(&tree, "[lang$=us]", p2));
        assert!(matches(&tree, "[class~=b]", div));
        assert!(matches(&tree, "[id*=ai]", div));
    }

    #[test]
    fn test_pseudo_classes() {
        let (tree, div, [p1, p2, span]) = sample();
        assert!(matches(&tree, "p:first-child", p1));
        assert!(matches(&tree, ":last-child", span));
        assert!(matches(&tree, ":root", div));
        assert!(matches(&tree, "span:empty", span));
        assert!(matches(&tree, "p:not(.x)", p2));
        assert!(!matches(&tree, "p:not(.x, [lang])", p2));
    }

    #[test]
    fn test_selector_list() {
        let (tree, _, [p1, _, span]) = sample();
        assert!(matches(&tree, "em, span", span));
        assert!(!matches(&tree, "em, span", p1));
    }

    #[test]
    fn test_invalid_selectors() {
        for bad in ["", "  ", "div >", "#", ".", "[a", "[a~b]", "p:hover", "a,,b", "1div", "div)"] {
            assert!(
                matches!(SelectorList::parse(bad), Err(DomError::InvalidSelector(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_escaped_ident() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attribute(div, "id", "a:b").unwrap();
        assert!(matches(&tree, r"#a\:b", div));
    }
}
