// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// closure.forget() deja el closure vivo en memoria wasm para siempre: solo
// se usa con elementos que se enlazan una vez (botones de la página y el
// tbody de coches), nunca con filas que se vuelven a renderizar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
