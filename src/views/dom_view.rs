// ============================================================================
// DOM VIEW - Renderiza en los elementos existentes de index.html
// ============================================================================
// Los botones "Rent" no llevan listener propio: un único click en el tbody
// de coches lee `data-car-id` del botón pulsado.
// ============================================================================

use std::cell::Cell;
use crate::dom::{
    append_child, clear_children, input_value, on_click, query_selector, require_element,
    set_attribute, set_display, set_input_value, set_text_content, ElementBuilder,
};
use crate::error::{AppError, AppResult};
use crate::models::CarId;
use crate::utils::{
    AUTH_INPUT_IDS, LOGIN_EMAIL_ID, LOGIN_PASSWORD_ID, REGISTER_EMAIL_ID, REGISTER_NAME_ID,
    REGISTER_PASSWORD_ID, RENT_BUTTON_LABEL, WELCOME_NAME_ID,
};
use crate::views::tables::{cell_attributes, parse_car_id, rent_button_attributes, CAR_ID_ATTRIBUTE};
use crate::views::{LoginForm, RegisterForm, RentalView, Section, Table, TableCell, TableRow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent};

#[derive(Default)]
pub struct DomRentalView {
    rent_clicks_bound: Cell<bool>,
}

impl DomRentalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn table_body(table: Table) -> AppResult<Element> {
        query_selector(&format!("#{} tbody", table.element_id()))?
            .ok_or_else(|| AppError::Dom(format!("No tbody in #{}", table.element_id())))
    }

    fn render_cell(cell: &TableCell) -> Result<Element, JsValue> {
        let td = ElementBuilder::new("td")?.build();
        for (name, value) in cell_attributes(cell) {
            set_attribute(&td, name, &value)?;
        }

        match cell {
            TableCell::Text(text) | TableCell::Placeholder(text) => set_text_content(&td, text),
            TableCell::RentButton(car_id) => {
                let mut button = ElementBuilder::new("button")?.text(RENT_BUTTON_LABEL);
                for (name, value) in rent_button_attributes(*car_id) {
                    button = button.attr(name, &value)?;
                }
                append_child(&td, &button.build())?;
            }
        }
        Ok(td)
    }

    /// Un solo listener por tbody; el tbody sobrevive a cada render
    fn bind_rent_clicks(&self, body: &Element) -> Result<(), JsValue> {
        if self.rent_clicks_bound.get() {
            return Ok(());
        }
        on_click(body, |event| {
            if let Some(car_id) = clicked_car_id(&event) {
                crate::rent_car(car_id);
            }
        })?;
        self.rent_clicks_bound.set(true);
        Ok(())
    }
}

fn clicked_car_id(event: &MouseEvent) -> Option<CarId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target
        .closest(&format!("button[{}]", CAR_ID_ATTRIBUTE))
        .ok()??;
    parse_car_id(&button.get_attribute(CAR_ID_ATTRIBUTE)?)
}

impl RentalView for DomRentalView {
    fn read_login_form(&self) -> AppResult<LoginForm> {
        Ok(LoginForm {
            email: input_value(LOGIN_EMAIL_ID)?,
            password: input_value(LOGIN_PASSWORD_ID)?,
        })
    }

    fn read_register_form(&self) -> AppResult<RegisterForm> {
        Ok(RegisterForm {
            name: input_value(REGISTER_NAME_ID)?,
            email: input_value(REGISTER_EMAIL_ID)?,
            password: input_value(REGISTER_PASSWORD_ID)?,
        })
    }

    fn set_section_visible(&self, section: Section, visible: bool) -> AppResult<()> {
        set_display(&require_element(section.element_id())?, visible)?;
        Ok(())
    }

    fn set_welcome_name(&self, name: &str) -> AppResult<()> {
        set_text_content(&require_element(WELCOME_NAME_ID)?, name);
        Ok(())
    }

    fn clear_auth_inputs(&self) -> AppResult<()> {
        for id in AUTH_INPUT_IDS {
            set_input_value(id, "")?;
        }
        Ok(())
    }

    fn render_table(&self, table: Table, rows: &[TableRow]) -> AppResult<()> {
        let body = Self::table_body(table)?;
        if table == Table::AvailableCars {
            self.bind_rent_clicks(&body)?;
        }
        clear_children(&body);

        for row in rows {
            let tr = ElementBuilder::new("tr")?.build();
            for cell in row {
                append_child(&tr, &Self::render_cell(cell)?)?;
            }
            append_child(&body, &tr)?;
        }
        Ok(())
    }
}
