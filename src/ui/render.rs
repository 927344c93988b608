use crate::catalog::{Category, Channel, MenuItem, Movie, Track};
use crate::ui::app::{App, HitMap};
use crate::ui::screens::{
    Browser, FlightControl, FlightsScreen, HomeScreen, PromotionsScreen, Screen, ShelfItem, Target,
};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const LOGO: &str = "H O T E L   T O L T E K A";

/// Draw the active screen and rebuild the pointer hit map.
pub fn render(frame: &mut Frame, app: &mut App) {
    let App {
        screen,
        config,
        theme,
        status,
        hit_map,
        ..
    } = app;
    hit_map.clear();

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    match screen {
        Screen::Home(home) => render_home(frame, area, home, &config.room, theme, hit_map),
        Screen::Promotions(promos) => render_promotions(frame, area, promos, theme, hit_map),
        Screen::Iptv(iptv) => render_iptv(frame, area, iptv, status.as_deref(), theme, hit_map),
        Screen::Movie(movies) => {
            render_movies(frame, area, movies, status.as_deref(), theme, hit_map);
        }
        Screen::Menu(menu) => render_menu(frame, area, menu, status.as_deref(), theme, hit_map),
        Screen::Music(music) => render_music(frame, area, music, theme, hit_map),
        Screen::Flights(flights) => render_flights(frame, area, flights, theme, hit_map),
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn render_home(
    frame: &mut Frame,
    area: Rect,
    home: &HomeScreen,
    room: &str,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let face = home.clock_face();

    let [header, _, logo, greeting, _, nav, _, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [clock_area, info_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(header);

    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            face.time.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(face.date.clone(), Style::default().fg(theme.fg_dim))),
    ]);
    frame.render_widget(clock, pad(clock_area));

    let lang_style = |code: &str| {
        if face.language.code().eq_ignore_ascii_case(code) {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        }
    };
    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            "23° / 21° C",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("ES", lang_style("es")),
            Span::styled(" | ", Style::default().fg(theme.fg_dim)),
            Span::styled("EN", lang_style("en")),
        ]),
        Line::from(Span::styled(
            format!("RM {room}"),
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(info, pad(info_area));

    frame.render_widget(
        Paragraph::new(Span::styled(
            LOGO,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        logo,
    );

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            face.greeting_text(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            face.language.tagline(),
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(welcome, greeting);

    let services = home.services();
    let slots = Layout::horizontal(services.iter().map(|_| Constraint::Length(14)))
        .flex(Flex::Center)
        .spacing(2)
        .split(nav);

    for (i, (service, slot)) in services.iter().zip(slots.iter()).enumerate() {
        let focused = home.cursor.is_focused(i);
        let card = Paragraph::new(vec![
            Line::from(service.icon),
            Line::from(""),
            Line::from(Span::styled(service.label, label_style(theme, focused))),
        ])
        .alignment(Alignment::Center)
        .block(card_block(theme, focused));
        frame.render_widget(card, *slot);
        hits.push(*slot, Target::Service(i));
    }

    render_hint(
        frame,
        footer,
        "Use las flechas ← → para navegar y Enter para seleccionar",
        None,
        theme,
    );
}

// ---------------------------------------------------------------------------
// Promotions
// ---------------------------------------------------------------------------

fn render_promotions(
    frame: &mut Frame,
    area: Rect,
    promos: &PromotionsScreen,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let [header, title, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, "Inicio", LOGO, true, theme, hits);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Promociones",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Descubre nuestras ofertas especiales",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    let rows = Layout::vertical([Constraint::Length(5), Constraint::Length(5)])
        .flex(Flex::Center)
        .spacing(1)
        .split(body);
    for (row, pair) in rows.iter().zip(promos.promotions().chunks(2)) {
        let cells = Layout::horizontal(pair.iter().map(|_| Constraint::Length(44)))
            .flex(Flex::Center)
            .spacing(2)
            .split(*row);
        for (cell, promo) in cells.iter().zip(pair) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    promo.description,
                    Style::default().fg(theme.fg),
                )),
                Line::from(""),
                Line::from(Span::styled(promo.note, Style::default().fg(theme.fg_dim))),
            ])
            .wrap(Wrap { trim: true })
            .block(card_block(theme, false).title(Span::styled(
                format!(" {} ", promo.title),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(card, *cell);
        }
    }

    render_hint(
        frame,
        footer,
        "Presione Escape para volver al menú principal",
        None,
        theme,
    );
}

// ---------------------------------------------------------------------------
// Dual-axis screens
// ---------------------------------------------------------------------------

/// Areas of a category/item screen: categories on the left, items and a
/// detail card on the right.
struct ShelfLayout {
    categories: Rect,
    items: Rect,
    detail: Rect,
    footer: Rect,
}

fn shelf_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    detail_height: u16,
    theme: &Theme,
    hits: &mut HitMap,
) -> ShelfLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, "Volver al inicio", title, false, theme, hits);

    let [categories, right] =
        Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(body);
    let [items, detail] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(detail_height)]).areas(right);

    ShelfLayout {
        categories,
        items,
        detail,
        footer,
    }
}

fn render_categories<T: ShelfItem>(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    browser: &Browser<T>,
    describe: impl Fn(&Category<T>) -> Option<String>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let block = panel_block(theme, heading);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = browser.grid.category_cursor();
    let rows: Vec<Rect> = stacked_rows(inner, 3).collect();
    let offset = scroll_offset(focus.index(), rows.len());
    for ((i, category), row) in browser
        .categories()
        .iter()
        .enumerate()
        .skip(offset)
        .zip(rows)
    {
        let focused = focus.is_focused(i);
        let mut lines = vec![Line::from(vec![
            Span::raw(format!("{} ", category.icon)),
            Span::styled(category.name, label_style(theme, focused)),
        ])];
        if let Some(extra) = describe(category) {
            lines.push(Line::from(Span::styled(
                extra,
                Style::default().fg(theme.fg_dim),
            )));
        }
        let card = Paragraph::new(lines).block(card_block(theme, focused));
        frame.render_widget(card, row);
        hits.push(row, Target::Category(i));
    }
}

/// Draw the items of the focused category, `row_height` lines each,
/// scrolled so the focused item is on screen.
fn render_items<T: ShelfItem>(
    frame: &mut Frame,
    area: Rect,
    browser: &Browser<T>,
    row_height: u16,
    lines: impl Fn(&T, bool) -> Vec<Line<'static>>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let heading = browser.current_category().map_or("", |c| c.name);
    let block = panel_block(theme, heading);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(category) = browser.current_category() else {
        return;
    };
    let focus = browser.grid.item_cursor();
    let rows: Vec<Rect> = stacked_rows(inner, row_height).collect();
    let offset = scroll_offset(focus.index(), rows.len());
    for ((i, item), row) in category
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .zip(rows)
    {
        let focused = focus.is_focused(i);
        let card = Paragraph::new(lines(item, focused)).block(card_block(theme, focused));
        frame.render_widget(card, row);
        hits.push(row, Target::Item(i));
    }
}

fn render_iptv(
    frame: &mut Frame,
    area: Rect,
    iptv: &Browser<Channel>,
    status: Option<&str>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let layout = shelf_layout(frame, area, "Televisión IPTV", 5, theme, hits);
    render_categories(
        frame,
        layout.categories,
        "Categorías",
        iptv,
        |_| None,
        theme,
        hits,
    );

    let accent = theme.accent;
    let fg = theme.fg;
    render_items(
        frame,
        layout.items,
        iptv,
        3,
        |channel, focused| {
            let style = if focused {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg)
            };
            vec![Line::from(vec![
                Span::raw("📺 "),
                Span::styled(channel.name, style),
            ])]
        },
        theme,
        hits,
    );

    let (channel, category) = match (iptv.current_item(), iptv.current_category()) {
        (Some(channel), Some(category)) => (channel.name, category.name),
        _ => ("", ""),
    };
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            channel,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(category, Style::default().fg(theme.fg_dim))),
    ])
    .block(panel_block(theme, "Reproduciendo ahora"));
    frame.render_widget(detail, layout.detail);

    render_hint(
        frame,
        layout.footer,
        "↑↓ Categorías | ←→ Canales | Enter: Reproducir | Esc: Volver",
        status,
        theme,
    );
}

fn render_movies(
    frame: &mut Frame,
    area: Rect,
    movies: &Browser<Movie>,
    status: Option<&str>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let layout = shelf_layout(frame, area, "Películas", 6, theme, hits);
    render_categories(
        frame,
        layout.categories,
        "Géneros",
        movies,
        |_| None,
        theme,
        hits,
    );

    let (accent, fg, fg_dim, secondary) = (theme.accent, theme.fg, theme.fg_dim, theme.secondary);
    render_items(
        frame,
        layout.items,
        movies,
        4,
        |movie, focused| {
            let title_style = if focused {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg).add_modifier(Modifier::BOLD)
            };
            vec![
                Line::from(Span::styled(movie.title, title_style)),
                movie_meta(movie, fg_dim, secondary),
            ]
        },
        theme,
        hits,
    );

    let mut lines = Vec::new();
    if let Some(movie) = movies.current_item() {
        lines.push(Line::from(Span::styled(
            movie.title,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(movie_meta(movie, theme.fg_dim, theme.secondary));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "▶ Reproducir",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel_block(theme, "Película destacada")),
        layout.detail,
    );

    render_hint(
        frame,
        layout.footer,
        "↑↓ Géneros | ←→ Películas | Enter: Reproducir | Esc: Volver",
        status,
        theme,
    );
}

fn movie_meta(movie: &Movie, dim: Color, star: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("★ ", Style::default().fg(star)),
        Span::styled(
            format!("{:.1}   ⏱ {}   {}", movie.rating, movie.duration, movie.year),
            Style::default().fg(dim),
        ),
    ])
}

fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &Browser<MenuItem>,
    status: Option<&str>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let layout = shelf_layout(frame, area, LOGO, 7, theme, hits);
    render_categories(
        frame,
        layout.categories,
        "Categorías",
        menu,
        |_| None,
        theme,
        hits,
    );

    let (accent, fg, fg_dim, secondary) = (theme.accent, theme.fg, theme.fg_dim, theme.secondary);
    render_items(
        frame,
        layout.items,
        menu,
        4,
        |item, focused| {
            let (name_style, price_style) = if focused {
                let style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
                (style, style)
            } else {
                (
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    Style::default().fg(secondary).add_modifier(Modifier::BOLD),
                )
            };
            vec![
                Line::from(vec![
                    Span::styled(item.name, name_style),
                    Span::raw("  "),
                    Span::styled(item.price, price_style),
                ]),
                Line::from(Span::styled(
                    format!("⏱ {}  ·  {}", item.time, item.description),
                    Style::default().fg(fg_dim),
                )),
            ]
        },
        theme,
        hits,
    );

    let mut lines = Vec::new();
    if let Some(item) = menu.current_item() {
        lines.push(Line::from(Span::styled(
            item.name,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            item.description,
            Style::default().fg(theme.fg_dim),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("⏱ {}   ", item.time), Style::default().fg(theme.fg_dim)),
            Span::styled(
                item.price,
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "📞 Solicitar ahora",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel_block(theme, "Selección actual")),
        layout.detail,
    );

    render_hint(
        frame,
        layout.footer,
        "↑↓ Categorías | ←→ Servicios | Enter: Solicitar | Esc: Volver",
        status,
        theme,
    );
}

fn render_music(
    frame: &mut Frame,
    area: Rect,
    music: &Browser<Track>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let layout = shelf_layout(frame, area, "Música Ambiental", 5, theme, hits);
    render_categories(
        frame,
        layout.categories,
        "Playlists",
        music,
        |playlist| Some(format!("{} canciones", playlist.items.len())),
        theme,
        hits,
    );

    let playing = music.is_playing();
    let (accent, fg, fg_dim) = (theme.accent, theme.fg, theme.fg_dim);
    render_items(
        frame,
        layout.items,
        music,
        4,
        |track, focused| {
            let icon = if focused && playing { "⏸ " } else { "▶ " };
            let title_style = if focused {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg)
            };
            vec![
                Line::from(vec![
                    Span::styled(icon, Style::default().fg(accent)),
                    Span::styled(track.title, title_style),
                    Span::styled(format!("  {}", track.duration), Style::default().fg(fg_dim)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", track.artist),
                    Style::default().fg(fg_dim),
                )),
            ]
        },
        theme,
        hits,
    );

    render_player(frame, layout.detail, music, theme, hits);

    render_hint(
        frame,
        layout.footer,
        "↑↓ Playlists | ←→ Canciones | Enter/Espacio: Play/Pausa | Esc: Volver",
        None,
        theme,
    );
}

fn render_player(
    frame: &mut Frame,
    area: Rect,
    music: &Browser<Track>,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let block = panel_block(theme, "Reproductor");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info, button, time] = Layout::horizontal([
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .areas(inner);

    if let Some(track) = music.current_item() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    track.title,
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(track.artist, Style::default().fg(theme.fg_dim))),
            ]),
            info,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("⏱ {}", track.duration),
                Style::default().fg(theme.fg_dim),
            ))
            .alignment(Alignment::Right),
            time,
        );
    }

    let (label, color) = if music.is_playing() {
        ("⏸ Pausa", theme.success)
    } else {
        ("▶ Play", theme.accent)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        ),
        button,
    );
    hits.push(button, Target::PlayToggle);
}

// ---------------------------------------------------------------------------
// Flights
// ---------------------------------------------------------------------------

fn render_flights(
    frame: &mut Frame,
    area: Rect,
    flights: &FlightsScreen,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let [bar, controls, board, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let face = flights.clock_face();
    let bar_style = Style::default()
        .fg(theme.bg)
        .bg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let [bar_title, bar_clock] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(pad(bar));
    frame.render_widget(Block::default().style(bar_style), bar);
    frame.render_widget(
        Paragraph::new(format!("✈  VUELOS • {}", flights.airport())).style(bar_style),
        bar_title,
    );
    frame.render_widget(
        Paragraph::new(face.time)
            .alignment(Alignment::Right)
            .style(bar_style),
        bar_clock,
    );

    let language = flights.language();
    let slots = Layout::horizontal(flights.controls().iter().map(|_| Constraint::Length(14)))
        .flex(Flex::Center)
        .spacing(2)
        .split(controls);
    for (i, (control, slot)) in flights.controls().iter().zip(slots.iter()).enumerate() {
        let focused = flights.cursor.is_focused(i);
        let (label, active) = match control {
            FlightControl::Back => ("← Inicio".to_string(), false),
            FlightControl::Mode(mode) => (
                mode.label(language).to_uppercase(),
                *mode == flights.mode(),
            ),
        };
        let style = if active {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            label_style(theme, focused)
        };
        let button = Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(card_block(theme, focused));
        frame.render_widget(button, *slot);
        hits.push(*slot, Target::FlightControl(i));
    }

    let mode_label = flights.mode().label(language);
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tablero de vuelos en línea:",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            flights.widget_url(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel_block(
        theme,
        &format!("{mode_label} - {}", flights.airport()),
    ));
    frame.render_widget(widget, board);

    render_hint(
        frame,
        footer,
        "Use ← → para navegar entre opciones • Enter para seleccionar • Escape para volver",
        None,
        theme,
    );
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Back button on the left, title centered. The back button registers a
/// [`Target::Back`] region.
fn render_header(
    frame: &mut Frame,
    area: Rect,
    back_label: &str,
    title: &str,
    back_focused: bool,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let [back, title_area, _] = Layout::horizontal([
        Constraint::Length(22),
        Constraint::Fill(1),
        Constraint::Length(22),
    ])
    .areas(area);

    let button = Paragraph::new(Span::styled(
        format!("← {back_label}"),
        label_style(theme, back_focused),
    ))
    .alignment(Alignment::Center)
    .block(card_block(theme, back_focused));
    frame.render_widget(button, back);
    hits.push(back, Target::Back);

    let title = Paragraph::new(Span::styled(
        title.to_string(),
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, centered_line(title_area));
}

/// Footer hint, or the last action when there is one.
fn render_hint(frame: &mut Frame, area: Rect, hint: &str, status: Option<&str>, theme: &Theme) {
    let line = match status {
        Some(status) => Line::from(vec![
            Span::styled(
                format!("● {status}"),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   {hint}"), Style::default().fg(theme.fg_dim)),
        ]),
        None => Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.fg_dim),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn label_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// Bordered card; focus gets a thick accent border and the focus background.
fn card_block(theme: &Theme, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if focused {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.focus_bg))
    } else {
        block
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.fg_dim))
    }
}

fn panel_block(theme: &Theme, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.fg_dim))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
}

/// Consecutive rows of `height` lines that fit entirely inside `area`.
fn stacked_rows(area: Rect, height: u16) -> impl Iterator<Item = Rect> {
    let fits = area.height / height.max(1);
    (0..fits).map(move |i| Rect {
        x: area.x,
        y: area.y + i * height,
        width: area.width,
        height,
    })
}

/// First index to draw so that `focus` lands inside a window of `fits` rows.
fn scroll_offset(focus: usize, fits: usize) -> usize {
    if fits == 0 {
        0
    } else {
        (focus + 1).saturating_sub(fits)
    }
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_rows_only_full_rows() {
        let rows: Vec<Rect> = stacked_rows(Rect::new(1, 2, 10, 10), 3).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Rect::new(1, 2, 10, 3));
        assert_eq!(rows[2], Rect::new(1, 8, 10, 3));
    }

    #[test]
    fn test_scroll_offset_keeps_focus_in_window() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(3, 3), 1);
        assert_eq!(scroll_offset(4, 2), 3);
        assert_eq!(scroll_offset(4, 0), 0);
    }

    #[test]
    fn test_stacked_rows_zero_height_area() {
        assert_eq!(stacked_rows(Rect::new(0, 0, 10, 0), 3).count(), 0);
    }
}
