use athlete_track_ui::App;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
