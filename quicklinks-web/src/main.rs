fn main() {
    dioxus::launch(quicklinks_web::App);
}
