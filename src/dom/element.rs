// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento por ID o error con el id que falta
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Query selector (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// `style.display = "block" | "none"`
pub fn set_display(element: &Element, visible: bool) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Valor de un <input> por ID
pub fn input_value(id: &str) -> Result<String, JsValue> {
    let element = require_element(id)?;
    let input = element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| JsValue::from_str(&format!("#{} is not an input", id)))?;
    Ok(input.value())
}

pub fn set_input_value(id: &str, value: &str) -> Result<(), JsValue> {
    let element = require_element(id)?;
    let input = element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| JsValue::from_str(&format!("#{} is not an input", id)))?;
    input.set_value(value);
    Ok(())
}
