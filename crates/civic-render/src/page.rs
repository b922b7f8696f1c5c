//! Pages with named mount points.
//!
//! A [`Page`] owns its containers and the [`CardRenderer`] used to fill them.
//! Mounting into a container id that does not exist is logged and ignored.

use crate::card::CardRenderer;
use crate::node::{Element, Node};
use civic_core::Official;

/// A named mount point on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    heading: Option<String>,
    content: Vec<Node>,
}

impl Container {
    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Section heading, if any.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Mounted nodes.
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    fn to_element(&self) -> Element {
        let mut section = Element::new("section").with_class("officials-section");
        if let Some(heading) = &self.heading {
            section.push(
                Element::new("h2")
                    .with_class("section-title")
                    .with_text(heading.as_str()),
            );
        }
        section.with_child(
            Element::new("div")
                .with_id(self.id.as_str())
                .with_class("officials-grid")
                .with_children(self.content.iter().cloned()),
        )
    }
}

/// A page made of containers, plus any extra body content.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    base_url: String,
    renderer: CardRenderer,
    containers: Vec<Container>,
    body: Vec<Node>,
}

impl Page {
    /// Create an empty page using the default card renderer.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_renderer(title, CardRenderer::default())
    }

    /// Create an empty page with a specific card renderer.
    pub fn with_renderer(title: impl Into<String>, renderer: CardRenderer) -> Self {
        Self {
            title: title.into(),
            base_url: "/".to_string(),
            renderer,
            containers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the URL relative links resolve against.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Add a container. Re-adding an existing id keeps the first.
    pub fn add_container(&mut self, id: impl Into<String>, heading: Option<&str>) {
        let id = id.into();
        if self.container(&id).is_some() {
            log::warn!("Container \"{id}\" already exists");
            return;
        }
        self.containers.push(Container {
            id,
            heading: heading.map(str::to_string),
            content: Vec::new(),
        });
    }

    /// Look up a container.
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Append a node to the page body, after the containers.
    pub fn push_body(&mut self, node: impl Into<Node>) {
        self.body.push(node.into());
    }

    /// Replace a container's content with one card per official.
    ///
    /// A missing container is logged and nothing changes.
    pub fn display_officials(&mut self, container_id: &str, officials: &[Official]) {
        let renderer = &self.renderer;
        let Some(container) = self.containers.iter_mut().find(|c| c.id == container_id) else {
            log::error!("Container with ID \"{container_id}\" not found");
            return;
        };
        container.content = officials
            .iter()
            .filter_map(|official| renderer.render(Some(official)))
            .collect();
        log::debug!(
            "Mounted {} cards into \"{container_id}\"",
            container.content.len()
        );
    }

    /// The page body as a node.
    pub fn to_node(&self) -> Node {
        Element::new("main")
            .with_class("page-content")
            .with_children(self.containers.iter().map(Container::to_element))
            .with_children(self.body.iter().cloned())
            .into()
    }

    /// Serialise as a complete HTML document.
    pub fn to_html(&self) -> String {
        html_document(&self.title, &self.base_url, &self.to_node())
    }
}

/// Wrap a body node in a complete HTML document.
pub fn html_document(title: &str, base_url: &str, body: &Node) -> String {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(Element::new("base").with_attr("href", base_url))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(title))
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", "styles.css"),
        );
    let html = Element::new("html")
        .with_attr("lang", "en")
        .with_child(head)
        .with_child(Element::new("body").with_child(body.clone()));
    format!("<!DOCTYPE html>\n{html}\n")
}
