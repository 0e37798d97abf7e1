//! Insertion and removal of the managed theme `<style>` element.

use base64::{Engine as _, engine::general_purpose};

/// Element id of the single style element owned by the injector.
pub const STYLE_ELEMENT_ID: &str = "__app_theme_css__";

/// Script execution hook exposed by whatever renders the pages.
///
/// Scripts are fire-and-forget: implementations queue them in submission
/// order and never report results back.
pub trait BrowserSurface {
    fn run_script(&mut self, code: &str);
}

/// Replace the managed style element with `css`.
///
/// The removal script is always submitted first, so repeated calls never
/// stack style elements. An empty `css` only removes.
pub fn apply<S: BrowserSurface + ?Sized>(surface: &mut S, css: &str) {
    remove(surface);
    if css.is_empty() {
        return;
    }
    surface.run_script(&insert_script(css));
}

/// Detach the managed style element if the page still has one.
pub fn remove<S: BrowserSurface + ?Sized>(surface: &mut S) {
    surface.run_script(&remove_script());
}

/// Script that creates the style element and fills it with `css`.
///
/// The CSS travels base64 encoded so arbitrary content can never break out
/// of the string literal.
pub fn insert_script(css: &str) -> String {
    let payload = general_purpose::STANDARD.encode(css.as_bytes());
    format!(
        r#"(function(){{
  try {{
    var style = document.getElementById('{id}');
    if (!style) {{
      style = document.createElement('style');
      style.type = 'text/css';
      style.id = '{id}';
      (document.head || document.documentElement).appendChild(style);
    }}
    var raw = atob('{payload}');
    var cssText = raw;
    if (typeof TextDecoder !== 'undefined') {{
      var bytes = new Uint8Array(raw.length);
      for (var i = 0; i < raw.length; i++) {{ bytes[i] = raw.charCodeAt(i); }}
      cssText = new TextDecoder('utf-8').decode(bytes);
    }}
    style.appendChild(document.createTextNode(cssText));
  }} catch (e) {{}}
}})();"#,
        id = STYLE_ELEMENT_ID,
    )
}

/// Script that detaches the managed style element. No-op when absent.
pub fn remove_script() -> String {
    format!(
        r#"(function(){{
  try {{
    var style = document.getElementById('{id}');
    if (style && style.parentNode) {{ style.parentNode.removeChild(style); }}
  }} catch (e) {{}}
}})();"#,
        id = STYLE_ELEMENT_ID,
    )
}
