//! DOM surface: `div.square` children of the canvas container, sized and
//! colored through custom properties on the document root.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{Paint, Surface, PAINTED_CLASS, SQUARE_CLASS};
use crate::error::{PixelpadError, Result};
use crate::grid::PaintMode;

/// Receives `(square index, bound mode)` for every `mouseover` on a square.
pub type HoverHandler = Rc<dyn Fn(u32, PaintMode)>;

const INDEX_ATTRIBUTE: &str = "data-index";

pub struct DomSurface {
    document: Document,
    root: HtmlElement,
    container: Element,
    squares: Vec<HtmlElement>,
    on_hover: HoverHandler,
    /// Listener shared by every square of the current rebuild.
    hover_closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl DomSurface {
    /// Wrap `container`; custom properties go on the document element.
    pub fn new(document: Document, container: Element) -> Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| PixelpadError::Dom("document has no root element".to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PixelpadError::Dom("document root is not an HTML element".to_string()))?;
        Ok(Self {
            document,
            root,
            container,
            squares: Vec::new(),
            on_hover: Rc::new(|_, _| {}),
            hover_closure: None,
        })
    }

    /// Route square hovers to `handler`. Applies from the next rebuild on.
    pub fn set_hover_handler(&mut self, handler: HoverHandler) {
        self.on_hover = handler;
    }

    fn hover_listener(&self, mode: PaintMode) -> Closure<dyn FnMut(MouseEvent)> {
        let on_hover = Rc::clone(&self.on_hover);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let index = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|square| square.get_attribute(INDEX_ATTRIBUTE))
                .and_then(|value| value.parse::<u32>().ok());
            if let Some(index) = index {
                on_hover(index, mode);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    }

    fn create_square(
        &self,
        index: u32,
        listener: &Closure<dyn FnMut(MouseEvent)>,
    ) -> Result<HtmlElement> {
        let square = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PixelpadError::Dom("div is not an HTML element".to_string()))?;
        square.class_list().add_1(SQUARE_CLASS)?;
        square.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
        square.add_event_listener_with_callback("mouseover", listener.as_ref().unchecked_ref())?;
        Ok(square)
    }

    fn remove_children(&self) -> Result<()> {
        while let Some(child) = self.container.first_child() {
            self.container.remove_child(&child)?;
        }
        Ok(())
    }
}

impl Drop for DomSurface {
    /// Squares stay on the page after the surface goes, so unhook them from
    /// the listener before it is freed.
    fn drop(&mut self) {
        let Some(listener) = self.hover_closure.take() else {
            return;
        };
        for square in &self.squares {
            let _ = square
                .remove_event_listener_with_callback("mouseover", listener.as_ref().unchecked_ref());
        }
    }
}

impl Surface for DomSurface {
    fn rebuild(&mut self, total_squares: u32, mode: PaintMode) -> Result<()> {
        let listener = self.hover_listener(mode);
        let fragment = self.document.create_document_fragment();
        let mut squares = Vec::with_capacity(usize::try_from(total_squares).unwrap_or(0));
        for index in 0..total_squares {
            let square = self.create_square(index, &listener)?;
            fragment.append_child(&square)?;
            squares.push(square);
        }

        self.remove_children()?;
        self.container.append_child(&fragment)?;
        self.squares = squares;
        // Old squares are detached, so their listener can go.
        drop(self.hover_closure.replace(listener));
        log::debug!("rebuilt {total_squares} squares ({} mode)", mode.as_str());
        Ok(())
    }

    fn paint(&mut self, square: u32, paint: Paint) -> Result<()> {
        let node = usize::try_from(square)
            .ok()
            .and_then(|index| self.squares.get(index));
        let Some(node) = node else {
            return Ok(());
        };
        match paint {
            Paint::Mark => node.class_list().add_1(PAINTED_CLASS)?,
            Paint::Fill(color) => node
                .style()
                .set_property("background-color", &color.to_css())?,
        }
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.root.style().set_property(name, value)?;
        Ok(())
    }

    fn square_count(&self) -> u32 {
        u32::try_from(self.squares.len()).unwrap_or(u32::MAX)
    }
}
