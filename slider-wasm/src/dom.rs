use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use slider_core::{LinkTarget, Motion, NavigatorConfig, NavigatorSurface, Section, SectionCatalog};

use crate::error::MountError;
use crate::state::STATE;
use crate::utils::{query_all, set_class};

/// A nav entry and the section it points at (`None` for an in-page
/// anchor that is not a slide).
#[derive(Clone)]
pub struct NavLink {
    pub element: Element,
    pub target: LinkTarget,
    pub index: Option<usize>,
}

/// Page elements the navigator drives.
pub struct DomSurface {
    window: Window,
    container: HtmlElement,
    slides: Vec<Element>,
    nav_links: Vec<NavLink>,
    active_class: String,
}

impl DomSurface {
    /// Collect the slide container, its sections and the nav entries, and
    /// build the section catalog from them.
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &NavigatorConfig,
    ) -> Result<(DomSurface, SectionCatalog), MountError> {
        let container = document
            .query_selector(&config.container_selector)
            .map_err(|_| MountError::Selector(config.container_selector.clone()))?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MountError::MissingContainer(config.container_selector.clone()))?;

        let slides = query_all(document, &config.section_selector)?;
        if slides.is_empty() {
            return Err(MountError::NoSections(config.section_selector.clone()));
        }

        let page_path = window.location().pathname().unwrap_or_default();
        let links: Vec<(Element, LinkTarget)> = query_all(document, &config.nav_link_selector)?
            .into_iter()
            .filter_map(|el| {
                let target = LinkTarget::from_attributes(
                    el.get_attribute("href").as_deref(),
                    el.get_attribute("data-section").as_deref(),
                    &page_path,
                )?;
                Some((el, target))
            })
            .collect();

        let ids: Vec<String> = slides
            .iter()
            .enumerate()
            .map(|(i, el)| {
                let id = el.id();
                if id.is_empty() {
                    format!("section-{}", i + 1)
                } else {
                    id
                }
            })
            .collect();
        let entries = ids.iter().enumerate().map(|(i, id)| {
            // label comes from the nav entry pointing at this section
            let label = links
                .iter()
                .find(|(_, target)| match target {
                    LinkTarget::Section(s) => s == id,
                    LinkTarget::Index(n) => *n == i as i64,
                })
                .and_then(|(el, _)| el.text_content())
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| id.clone());
            (id.clone(), label)
        });
        let catalog = SectionCatalog::from_entries(entries)
            .ok_or_else(|| MountError::NoSections(config.section_selector.clone()))?;

        let nav_links = links
            .into_iter()
            .map(|(element, target)| {
                let index = match &target {
                    LinkTarget::Section(id) => catalog.resolve(id),
                    LinkTarget::Index(n) => usize::try_from(*n)
                        .ok()
                        .filter(|n| *n < catalog.len()),
                };
                NavLink {
                    element,
                    target,
                    index,
                }
            })
            .collect();

        Ok((
            DomSurface {
                window: window.clone(),
                container,
                slides,
                nav_links,
                active_class: config.active_class.clone(),
            },
            catalog,
        ))
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }
}

impl NavigatorSurface for DomSurface {
    fn apply_transform(&mut self, transform: &str, motion: Motion) {
        let style = self.container.style();
        let res = match motion {
            Motion::Animated => style.set_property("transform", transform),
            Motion::Instant => style
                .set_property("transition", "none")
                .and_then(|_| style.set_property("transform", transform))
                .map(|_| {
                    // flush layout so the stylesheet transition is back for the next move
                    let _ = self.container.offset_width();
                })
                .and_then(|_| style.remove_property("transition").map(|_| ())),
        };
        if let Err(e) = res {
            log::warn!("slider: transform update failed: {e:?}");
        }
    }

    fn mark_active(&mut self, section: &Section) {
        for (i, slide) in self.slides.iter().enumerate() {
            set_class(slide, &self.active_class, i == section.index);
        }
        for link in &self.nav_links {
            set_class(
                &link.element,
                &self.active_class,
                link.index == Some(section.index),
            );
        }
    }

    fn replace_fragment(&mut self, id: &str) {
        let res = self.window.history().and_then(|h| {
            h.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")))
        });
        if let Err(e) = res {
            log::warn!("slider: replaceState failed: {e:?}");
        }
    }

    fn schedule_settle(&mut self, after_ms: u32) -> bool {
        let settle = Closure::once_into_js(move || {
            STATE.with(|st| {
                if let Some(state) = st.borrow().as_ref() {
                    state.borrow_mut().nav.settle();
                }
            });
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                settle.unchecked_ref(),
                i32::try_from(after_ms).unwrap_or(i32::MAX),
            ) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("slider: setTimeout failed: {e:?}");
                false
            }
        }
    }
}
