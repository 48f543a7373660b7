use ontario_home_leads::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
