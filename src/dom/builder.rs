// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Agregar hijo
    pub fn child(self, child: &Element) -> Result<Self, JsValue> {
        append_child(&self.element, child)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

// Tests de DOM: solo compilan para wasm32 y se ejecutan en navegador
// (wasm-pack test)
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_builder_sets_class_text_and_attrs() {
        let element = ElementBuilder::new("button")
            .unwrap()
            .class("btn-login")
            .text("Login")
            .attr("type", "submit")
            .unwrap()
            .build();

        assert_eq!(element.class_name(), "btn-login");
        assert_eq!(element.text_content().unwrap(), "Login");
        assert_eq!(element.get_attribute("type").unwrap(), "submit");
    }

    #[wasm_bindgen_test]
    fn test_builder_appends_children() {
        let child = ElementBuilder::new("span").unwrap().text("hijo").build();
        let parent = ElementBuilder::new("div")
            .unwrap()
            .child(&child)
            .unwrap()
            .build();

        assert_eq!(parent.child_element_count(), 1);
    }
}
