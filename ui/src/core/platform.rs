//! Host environment queries.

/// Origin of the hosting page (`https://host:port`), if there is one.
///
/// Native builds have no page, so this is always `None` there.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| !origin.is_empty() && origin != "null")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
