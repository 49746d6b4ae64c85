//! Browser entry point.
//!
//! `PixelPad` looks up the page's controls, wires their events to a
//! [`Session`], and draws the default grid. Listeners are removed again when
//! the pad is dropped (or `free()`d from JavaScript).
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PixelPad } from 'pixelpad';
//! await init();
//! const pad = new PixelPad({ toggleKey: 'd', color: 'black' });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::app::{AppState, Control, Event, Session};
use crate::color::OsRandom;
use crate::config::PadOptions;
use crate::controls::DomControls;
use crate::error::{PixelpadError, Result};
use crate::grid::PaintMode;
use crate::logging;
use crate::render::{DomSurface, Surface};

type DomSession = Session<DomSurface, DomControls, OsRandom>;
type SharedSession = Rc<RefCell<DomSession>>;

/// A registered DOM listener, removed on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// The pixel-art pad exported to JavaScript.
#[wasm_bindgen]
pub struct PixelPad {
    session: SharedSession,
    // Held for their Drop impls.
    _listeners: Vec<Listener>,
}

/// Run `action` on the session unless another event is still being handled.
fn with_session(session: &SharedSession, action: impl FnOnce(&mut DomSession) -> Result<()>) {
    let Ok(mut session) = session.try_borrow_mut() else {
        log::warn!("event dropped: another event is still running");
        return;
    };
    if let Err(e) = action(&mut session) {
        log::error!("{e}");
    }
}

fn run(session: &SharedSession, event: Event) {
    with_session(session, |s| s.dispatch(event));
}

fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PixelpadError::Dom(format!("no element matches {selector}")))
}

fn query_html(document: &Document, selector: &str) -> Result<HtmlElement> {
    query(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PixelpadError::Dom(format!("{selector} is not an HTML element")))
}

fn on_click(
    session: &SharedSession,
    button: &HtmlElement,
    action: impl Fn(&mut DomSession) -> Result<()> + 'static,
) -> Result<Listener> {
    let session = Rc::clone(session);
    Listener::attach(button, "click", move |_| {
        with_session(&session, |s| action(s));
    })
}

#[wasm_bindgen]
impl PixelPad {
    /// Create the pad from optional options (see `PadOptions` for the keys).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> std::result::Result<PixelPad, JsValue> {
        console_error_panic_hook::set_once();

        let options: PadOptions = if options.is_undefined() || options.is_null() {
            PadOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| PixelpadError::Config(e.to_string()))?
        };
        options.validate()?;
        logging::init(options.level_filter());

        Ok(Self::mount(options)?)
    }

    /// Change the Default-mode paint color (`--square-color`).
    #[wasm_bindgen(js_name = "setColor")]
    pub fn set_color(&self, color: String) {
        run(&self.session, Event::SetColor(color));
    }

    /// Whether hovering currently paints.
    #[wasm_bindgen(js_name = "drawEnabled")]
    pub fn draw_enabled(&self) -> bool {
        self.session.borrow().state().draw_enabled
    }

    #[wasm_bindgen(js_name = "squaresPerSide")]
    pub fn squares_per_side(&self) -> u32 {
        self.session.borrow().state().grid.squares_per_side()
    }

    /// Number of squares currently in the container.
    #[wasm_bindgen(js_name = "squareCount")]
    pub fn square_count(&self) -> u32 {
        self.session.borrow().surface().square_count()
    }

    /// `"default"` or `"random"`.
    pub fn mode(&self) -> String {
        self.session.borrow().state().grid.mode().as_str().to_string()
    }
}

impl PixelPad {
    fn mount(options: PadOptions) -> Result<PixelPad> {
        let window =
            web_sys::window().ok_or_else(|| PixelpadError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PixelpadError::Dom("no document".to_string()))?;

        let selectors = &options.selectors;
        let container = query(&document, &selectors.canvas)?;
        let size_input = query(&document, &selectors.size_input)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| PixelpadError::Dom(format!("{} is not an input", selectors.size_input)))?;
        let create_button = query_html(&document, &selectors.create_button)?;
        let random_button = query_html(&document, &selectors.random_button)?;
        let default_button = query_html(&document, &selectors.default_button).ok();
        if default_button.is_none() {
            log::info!("no {} on the page; Default mode only at startup", selectors.default_button);
        }

        let inner_width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let canvas_width = options.canvas_width_for(inner_width);
        let state = AppState::new(options, canvas_width);
        let surface = DomSurface::new(document.clone(), container)?;
        let controls = DomControls::new(
            window,
            size_input,
            create_button,
            random_button,
            default_button,
        );
        let session: SharedSession =
            Rc::new(RefCell::new(Session::new(state, surface, controls, OsRandom)));

        {
            let weak = Rc::downgrade(&session);
            session
                .borrow_mut()
                .surface_mut()
                .set_hover_handler(Rc::new(move |square: u32, bound_mode: PaintMode| {
                    if let Some(session) = weak.upgrade() {
                        run(&session, Event::Hover { square, bound_mode });
                    }
                }));
        }

        let listeners = Self::wire(&session, &document)?;
        session.borrow_mut().dispatch(Event::Startup)?;
        log::info!("pixelpad ready");

        Ok(PixelPad {
            session,
            _listeners: listeners,
        })
    }

    fn wire(session: &SharedSession, document: &Document) -> Result<Vec<Listener>> {
        let (size_input, create, random, default) = {
            let s = session.borrow();
            let controls = s.controls();
            (
                controls.size_input_element().clone(),
                controls.button(Control::Create).cloned(),
                controls.button(Control::Random).cloned(),
                controls.button(Control::Default).cloned(),
            )
        };
        let mut listeners = Vec::new();

        {
            let session = Rc::clone(session);
            listeners.push(Listener::attach(&size_input, "change", move |_| {
                with_session(&session, |s| s.size_changed());
            })?);
        }

        if let Some(button) = create {
            listeners.push(on_click(session, &button, |s| s.create())?);
        }
        if let Some(button) = random {
            listeners.push(on_click(session, &button, |s| s.dispatch(Event::RandomMode))?);
        }
        if let Some(button) = default {
            listeners.push(on_click(session, &button, |s| s.dispatch(Event::DefaultMode))?);
        }

        {
            let session = Rc::clone(session);
            listeners.push(Listener::attach(document, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    run(&session, Event::KeyPressed(event.key()));
                }
            })?);
        }

        Ok(listeners)
    }
}
