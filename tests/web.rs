// ============================================================================
// BROWSER TESTS - Render y navegación sobre DOM real
// ============================================================================

use wasm_bindgen_test::*;

use spa_shell::app::App;
use spa_shell::dom;
use spa_shell::router::Router;
use spa_shell::store::compose_store;
use spa_shell::views::{render_home, render_not_found, NOT_FOUND_TEXT};

wasm_bindgen_test_configure!(run_in_browser);

fn text_of(element: &web_sys::Element) -> String {
    element.text_content().unwrap_or_default()
}

fn make_root() -> web_sys::Element {
    let document = dom::document().expect("document");
    let root = document.create_element("div").expect("root");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append root");
    root
}

fn drop_root(root: &web_sys::Element) {
    root.remove();
}

#[wasm_bindgen_test]
fn home_view_renders_a_greeting() {
    let store = compose_store();
    let view = render_home(&store).expect("home view");

    assert_eq!(view.tag_name().to_lowercase(), "main");
    assert_eq!(view.class_name(), "home");
    assert!(text_of(&view).contains("Welcome"));
}

#[wasm_bindgen_test]
fn fallback_view_renders_the_exact_text() {
    let store = compose_store();
    let view = render_not_found(&store).expect("fallback view");

    assert_eq!(view.class_name(), "not-found");
    assert_eq!(text_of(&view), NOT_FOUND_TEXT);
    assert_eq!(NOT_FOUND_TEXT, "There's nothing here!");
}

#[wasm_bindgen_test]
fn unknown_path_mounts_the_fallback() {
    let root = make_root();

    Router::push("/unknown/path").expect("push");
    let mut app = App::new(root.clone()).expect("app");
    app.render().expect("render");

    assert!(text_of(&root).contains(NOT_FOUND_TEXT));

    drop_root(&root);
}

#[wasm_bindgen_test]
fn navigate_updates_location_and_view() {
    let root = make_root();
    let mut app = App::new(root.clone()).expect("app");

    app.navigate("/").expect("navigate home");
    assert_eq!(Router::current_path(), "/");
    assert!(text_of(&root).contains("Welcome"));

    app.navigate("/missing").expect("navigate missing");
    assert_eq!(Router::current_path(), "/missing");
    assert!(text_of(&root).contains(NOT_FOUND_TEXT));

    drop_root(&root);
}

#[wasm_bindgen_test]
fn dispatch_does_not_change_rendered_state() {
    let root = make_root();
    let mut app = App::new(root.clone()).expect("app");
    app.navigate("/").expect("navigate home");

    let before = app.store().get_state();
    app.store().dispatch(spa_shell::store::demo_action("x"));
    assert_eq!(app.store().get_state(), before);

    drop_root(&root);
}
