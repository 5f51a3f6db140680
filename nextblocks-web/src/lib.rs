/// NextBlocks Web - WASM page shell for the block logo
///
/// Mounts the page overlay and canvas, classifies the device after the first
/// frame, and hands the scene description to a JavaScript rendering runtime.
use nextblocks_core::page::{
    Lifecycle, SocialLink, ICON_COLOR, ICON_HOVER_COLOR, LOGO_OFFSET_PX, PAGE_BACKGROUND,
};
use nextblocks_core::{compose, DeviceState, PageConfig, PageShell, SceneDescription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn user_agent() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().user_agent().ok())
}

fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = element.dyn_ref::<HtmlElement>().ok_or("element has no style")?.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Hover rule for the social icons; inline styles cannot express `:hover`
fn social_stylesheet() -> String {
    format!(
        "[data-social] {{ color: {ICON_COLOR}; transition: color 150ms; }} \
         [data-social]:hover {{ color: {ICON_HOVER_COLOR}; }}"
    )
}

fn social_anchor(document: &Document, link: &SocialLink) -> Result<Element, JsValue> {
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &link.href)?;
    anchor.set_attribute("target", SocialLink::TARGET)?;
    anchor.set_attribute("rel", SocialLink::REL)?;
    anchor.set_attribute("aria-label", link.kind.label())?;
    anchor.set_attribute("data-social", &link.kind.label().to_lowercase())?;
    anchor.set_inner_html(&link.kind.icon().svg());
    set_styles(&anchor, &[("display", "inline-flex"), ("text-decoration", "none")])?;
    Ok(anchor)
}

struct PageState {
    config: PageConfig,
    shell: PageShell,
    device: DeviceState,
    lifecycle: Lifecycle,
    renderer: js_sys::Function,
    canvas: Option<HtmlCanvasElement>,
}

impl PageState {
    fn scene(&self) -> SceneDescription {
        compose(self.device.profile(), &self.config)
    }

    fn attach(&mut self) -> bool {
        let changed = self.device.attach(user_agent().as_deref());
        log::info!("device profile: mobile={}", self.device.profile().is_mobile);
        changed
    }
}

/// Hand the current scene to the rendering runtime.
///
/// The state borrow ends before the callback runs so the runtime may call back into the page.
fn render(state: &RefCell<PageState>) -> Result<(), JsValue> {
    let (renderer, canvas, scene) = {
        let state = state.borrow();
        let canvas = state
            .canvas
            .clone()
            .ok_or_else(|| JsValue::from_str("page is not mounted"))?;
        let scene = state.scene().to_json().map_err(|e| JsValue::from_str(&e.to_string()))?;
        (state.renderer.clone(), canvas, scene)
    };
    renderer.call2(&JsValue::NULL, &canvas, &JsValue::from_str(&scene))?;
    Ok(())
}

/// Classify the device once the first frame is out, re-rendering if the layout changes
fn attach_after_first_frame(state: Rc<RefCell<PageState>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let callback = Closure::once_into_js(move || {
        let changed = {
            let mut page = state.borrow_mut();
            page.lifecycle.attach() && page.attach()
        };
        if changed {
            if let Err(err) = render(&state) {
                log::error!("re-render after attach failed: {:?}", err);
            }
        }
    });
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

/// The page: overlay, canvas, device state, and the renderer entry point
#[wasm_bindgen]
pub struct BlocksPage {
    state: Rc<RefCell<PageState>>,
}

#[wasm_bindgen]
impl BlocksPage {
    /// `renderer` is called as `renderer(canvas, sceneJson)` whenever the scene changes.
    /// `config` is optional page configuration JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(renderer: js_sys::Function, config: Option<String>) -> Result<BlocksPage, JsValue> {
        let config = match config {
            Some(json) => PageConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => PageConfig::default(),
        };
        let shell = PageShell::new(&config);

        Ok(BlocksPage {
            state: Rc::new(RefCell::new(PageState {
                config,
                shell,
                device: DeviceState::new(),
                lifecycle: Lifecycle::default(),
                renderer,
                canvas: None,
            })),
        })
    }

    /// Build the page inside the element with `container_id` and render with
    /// desktop defaults. The device is classified on the next animation frame.
    /// Mounting an already mounted page does nothing.
    pub fn mount(&self, container_id: &str) -> Result<(), JsValue> {
        if self.state.borrow().lifecycle.is_mounted() {
            log::warn!("page already mounted, ignoring mount into #{container_id}");
            return Ok(());
        }

        let document = document()?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("container #{container_id} not found")))?;

        set_styles(
            &container,
            &[
                ("position", "relative"),
                ("width", "100%"),
                ("height", "100vh"),
                ("background", PAGE_BACKGROUND),
            ],
        )?;

        let stylesheet = document.create_element("style")?;
        stylesheet.set_text_content(Some(&social_stylesheet()));
        container.append_child(&stylesheet)?;

        // Social links, top right
        let links = document.create_element("div")?;
        set_styles(
            &links,
            &[
                ("position", "absolute"),
                ("top", "1rem"),
                ("right", "1rem"),
                ("display", "flex"),
                ("gap", "1rem"),
                ("z-index", "50"),
            ],
        )?;
        for link in &self.state.borrow().shell.links {
            let anchor = social_anchor(&document, link)?;
            links.append_child(&anchor)?;
        }
        container.append_child(&links)?;

        // Logo image, centered above the middle
        let logo_box = document.create_element("div")?;
        let top = format!("calc(50% - {LOGO_OFFSET_PX}px)");
        set_styles(
            &logo_box,
            &[
                ("position", "absolute"),
                ("top", top.as_str()),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
                ("z-index", "10"),
            ],
        )?;
        let logo = document.create_element("img")?;
        {
            let state = self.state.borrow();
            logo.set_attribute("src", &state.shell.logo.src)?;
            logo.set_attribute("alt", &state.shell.logo.alt)?;
        }
        set_styles(&logo, &[("width", "6rem"), ("height", "auto")])?;
        logo_box.append_child(&logo)?;
        container.append_child(&logo_box)?;

        // Rendering surface
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        set_styles(&canvas, &[("width", "100%"), ("height", "100%"), ("display", "block")])?;
        container.append_child(&canvas)?;
        {
            let mut state = self.state.borrow_mut();
            state.canvas = Some(canvas);
            state.lifecycle.mount();
        }

        render(&self.state)?;
        attach_after_first_frame(Rc::clone(&self.state))
    }

    #[wasm_bindgen(getter, js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.state.borrow().device.profile().is_mobile
    }

    /// Current scene description as JSON
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.state
            .borrow()
            .scene()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Overlay and camera description as JSON
    #[wasm_bindgen(js_name = shellJson)]
    pub fn shell_json(&self) -> Result<String, JsValue> {
        self.state
            .borrow()
            .shell
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Hand the current scene to the rendering runtime again
    pub fn render(&self) -> Result<(), JsValue> {
        render(&self.state)
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("NextBlocks web shell loaded");
    Ok(())
}
