use crate::layout::TABLET_BREAKPOINT_PX;

pub(super) fn viewport_width() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(width) = window.inner_width().ok().and_then(|value| value.as_f64()) {
                return width as i32;
            }
        }
    }

    TABLET_BREAKPOINT_PX - 1
}
