use ballotdesk::app::App;
use ballotdesk::core::actions::{find_action, Action};
use ballotdesk::logger;
use ballotdesk::models::ScreenKind;
use ballotdesk::ui::{
    self, CommandBar, ConfirmModal, DelegateView, Dialog, LayoutMode, StatusBar, TabBar, VoteView,
    WarningScreen,
};
use ballotdesk::utils::error::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    // 로그는 파일로만 (터미널은 TUI가 사용)
    match logger::init() {
        Ok(path) => log::info!("logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    // Create app
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("event loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    log::info!("exiting ({} actions committed)", app.committed_count());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Wide | LayoutMode::Compact => {
                    render_main_ui(f, app);
                }
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.modifiers, key.code);
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 키 입력 분기 (확인 모달 > 정보 다이얼로그 > 일반)
fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if app.layout.is_too_small() {
        handle_too_small_keys(app, modifiers, code);
    } else if app.is_confirming() {
        handle_confirm_modal_keys(app, modifiers, code);
    } else if app.dialog.is_some() {
        handle_dialog_keys(app, modifiers, code);
    } else {
        handle_normal_keys(app, modifiers, code);
    }
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 경고 화면에서는 종료만 허용
fn handle_too_small_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if find_action(modifiers, code) == Some(Action::Quit) {
        app.execute_action(Action::Quit);
    }
}

/// 확인 모달 키 처리
fn handle_confirm_modal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.modal_cancel();
            app.execute_action(Action::Quit);
        }
        // 버튼 이동
        (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right) => {
            app.modal_toggle_button();
        }
        // 포커스된 버튼 실행
        (_, KeyCode::Enter) => app.modal_activate(),
        (_, KeyCode::Char('y')) => app.modal_confirm(),
        // 닫기
        (_, KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc) => app.modal_cancel(),
        _ => {}
    }
}

/// 정보 다이얼로그 키 처리
fn handle_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Esc
        | KeyCode::Enter
        | KeyCode::Char('q')
        | KeyCode::Char('?')
        | KeyCode::Char('L')
        | KeyCode::Char(' ') => {
            app.close_dialog();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.dialog_scroll_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.dialog_scroll_up();
        }
        _ => {}
    }
}

/// 상태바 데이터 수집 + 렌더링
fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let focus = app.focus_label();
    let status_bar = StatusBar::new()
        .screen(app.current_screen.title())
        .focus(&focus)
        .committed(app.committed_count())
        .toast(app.toast_display())
        .layout_mode(app.layout_mode_str())
        .theme(theme);
    f.render_widget(status_bar, area);
}

/// 현재 화면 본문 렌더링
fn render_body(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let wide = app.layout.is_wide();
    match app.current_screen {
        ScreenKind::CastVote => {
            let view = VoteView::new(&app.vote_screen, &app.vote_stats, theme).wide(wide);
            f.render_widget(view, area);
        }
        ScreenKind::DelegateVote => {
            let view = DelegateView::new(&app.delegate_screen, &app.overview, theme, Local::now())
                .wide(wide);
            f.render_widget(view, area);
        }
    }
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    let tab_bar = TabBar::new().active(app.current_screen).theme(theme);
    f.render_widget(tab_bar, areas.tab_bar);

    render_body(f, app, theme, areas.body);
    render_status_bar(f, app, theme, areas.status_bar);

    let command_bar = CommandBar::new().commands(app.command_items()).theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }

    // 확인 모달은 가장 위에
    let screen = app.active_screen();
    if screen.confirmation.is_visible() {
        let modal = ConfirmModal::new(screen.confirmation.current_prompt())
            .focused(screen.modal_button)
            .theme(theme);
        f.render_widget(modal, f.area());
    }
}
