use crate::ui::app::{App, Route};
use crate::ui::create::render_create;
use crate::ui::dashboard::render_dashboard;
use crate::ui::detail::render_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, base_url: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route(), base_url).widget(), header);

    frame.render_widget(Clear, body);
    match app.route() {
        Route::Dashboard => render_dashboard(frame, body, app.dashboard()),
        Route::Create => render_create(frame, body, app.create_form()),
        Route::Detail => render_detail(frame, body, app.detail()),
    }

    let footer_widget = Footer::new(app.route(), app.detail().mode(), app.last_command_error());
    frame.render_widget(footer_widget.widget(footer), footer);
}
