use crate::constants::{CONFIG_ATTR_PREFIX, CSS_MOUSE_X, CSS_MOUSE_Y};
use glass_core::{ConfigError, GlassConfig, SurfaceCategory};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_surface(target: Option<web::EventTarget>, selector: &str) -> Option<web::Element> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

pub fn classify(surface: &web::Element) -> Option<SurfaceCategory> {
    let list = surface.class_list();
    let classes: Vec<String> = (0..list.length()).filter_map(|i| list.item(i)).collect();
    SurfaceCategory::from_classes(classes.iter().map(String::as_str))
}

/// `pointerover` bubbles from every descendant; only count it as entering
/// `surface` when the pointer came from outside of it.
pub fn entered_from_outside(ev: &web::MouseEvent, surface: &web::Element) -> bool {
    match ev
        .related_target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
    {
        Some(from) => !surface.contains(Some(&from)),
        None => true,
    }
}

/// Publish the pointer position for the specular glint styles.
pub fn set_glint(root: &web::HtmlElement, x: i32, y: i32) {
    let style = root.style();
    _ = style.set_property(CSS_MOUSE_X, &format!("{}px", x));
    _ = style.set_property(CSS_MOUSE_Y, &format!("{}px", y));
}

pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Read `data-glass-*` overrides from the document root.
pub fn read_config(document: &web::Document) -> Result<GlassConfig, ConfigError> {
    let Some(root) = document.document_element() else {
        return Ok(GlassConfig::default());
    };
    GlassConfig::from_overrides(|key| root.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key)))
}
