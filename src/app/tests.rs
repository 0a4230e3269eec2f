use super::*;
use crate::core::actions::Action;
use crate::core::confirm::ConfirmationState;
use crate::core::pending::PendingAction;
use crate::core::registry::ActionId;
use crate::models::ModalButton;
use crate::ui::components::dialog::max_scroll_offset;
use crate::ui::Dialog;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use std::fs;
use tempfile::TempDir;

fn make_test_app() -> App {
    App::new_for_test()
}

fn committed(screen: &ScreenState) -> Vec<(usize, ActionId)> {
    screen
        .confirmation
        .sink()
        .entries()
        .iter()
        .map(|e| (e.item_index, e.action))
        .collect()
}

#[test]
fn test_initial_state() {
    let app = make_test_app();
    assert_eq!(app.current_screen, ScreenKind::CastVote);
    assert_eq!(app.delegate_screen.section, Section::AutoDelegate);
    assert_eq!(app.delegate_screen.category_index, 1);
    assert!(!app.is_confirming());
    assert!(app.dialog.is_none());
    assert_eq!(app.committed_count(), 0);
}

/// 투표 화면: 세 번째 카드는 위임 카드라 YES가 비활성, 두 번째 카드에서 YES 확정
#[test]
fn test_vote_yes_flow_on_vote_screen() {
    let mut app = make_test_app();
    app.execute_action(Action::NextCard);
    app.execute_action(Action::VoteYes);

    assert!(app.is_confirming());
    assert_eq!(app.active_screen().modal_button, ModalButton::Confirm);
    assert_eq!(
        app.active_screen().confirmation.current_prompt().title,
        "Vote YES"
    );

    app.modal_activate();

    assert!(!app.is_confirming());
    assert_eq!(committed(&app.vote_screen), vec![(1, ActionId::VoteYes)]);
    assert_eq!(app.toast_display(), Some("Vote YES confirmed"));
}

#[test]
fn test_last_request_wins() {
    let mut app = make_test_app();
    app.execute_action(Action::Decline);
    app.execute_action(Action::Delegate);
    assert_eq!(
        app.active_screen().confirmation.state(),
        ConfirmationState::AwaitingConfirmation(PendingAction {
            item_index: 0,
            action: ActionId::Delegate
        })
    );

    app.modal_confirm();
    assert_eq!(committed(&app.vote_screen), vec![(0, ActionId::Delegate)]);
}

#[test]
fn test_cancel_button_commits_nothing() {
    let mut app = make_test_app();
    app.execute_action(Action::AutoDelegate);
    app.modal_toggle_button();
    assert_eq!(app.active_screen().modal_button, ModalButton::Cancel);

    app.modal_activate();
    assert!(!app.is_confirming());
    assert_eq!(app.committed_count(), 0);
}

#[test]
fn test_new_request_resets_focus_to_confirm() {
    let mut app = make_test_app();
    app.execute_action(Action::VoteNo);
    app.modal_toggle_button();
    app.modal_cancel();

    app.execute_action(Action::VoteNo);
    assert_eq!(app.active_screen().modal_button, ModalButton::Confirm);
}

#[test]
fn test_confirm_while_hidden_is_noop() {
    let mut app = make_test_app();
    app.modal_confirm();
    app.modal_cancel();
    assert_eq!(app.committed_count(), 0);
    assert!(app.toast_display().is_none());
}

#[test]
fn test_disabled_vote_buttons_show_toast() {
    let mut app = make_test_app();
    app.execute_action(Action::NextCard);
    app.execute_action(Action::NextCard);
    app.execute_action(Action::VoteYes);

    assert!(!app.is_confirming());
    assert_eq!(app.toast_display(), Some("Vote YES is not available here"));

    // 위임 카드에서는 Switch 가능
    app.execute_action(Action::SwitchDelegate);
    assert!(app.is_confirming());
}

#[test]
fn test_screens_own_separate_controllers() {
    let mut app = make_test_app();
    app.execute_action(Action::VoteNo);
    assert!(app.vote_screen.confirmation.is_visible());

    app.execute_action(Action::NextScreen);
    assert_eq!(app.current_screen, ScreenKind::DelegateVote);
    assert!(!app.is_confirming());

    // 위임 화면 확정은 투표 화면 대기 액션과 무관
    app.execute_action(Action::VoteMyself);
    app.modal_confirm();
    assert_eq!(committed(&app.delegate_screen), vec![(0, ActionId::VoteMyself)]);
    assert!(app.vote_screen.confirmation.is_visible());
    assert!(committed(&app.vote_screen).is_empty());

    app.execute_action(Action::PrevScreen);
    assert!(app.is_confirming());
}

#[test]
fn test_delegate_sections_route_actions() {
    let mut app = make_test_app();
    app.execute_action(Action::NextScreen);

    // 자동 위임 구역: Decline 불가
    app.execute_action(Action::Decline);
    assert!(!app.is_confirming());

    // 위임받은 사람 구역: Decline 가능
    app.execute_action(Action::NextSection);
    app.execute_action(Action::Decline);
    assert!(app.is_confirming());
    app.modal_confirm();

    // 법안 카드 구역
    app.execute_action(Action::NextSection);
    app.execute_action(Action::NextCard);
    app.execute_action(Action::Delegate);
    app.modal_confirm();

    assert_eq!(
        committed(&app.delegate_screen),
        vec![(0, ActionId::Decline), (1, ActionId::Delegate)]
    );
}

#[test]
fn test_category_only_cycles_on_delegate_screen() {
    let mut app = make_test_app();
    app.execute_action(Action::NextCategory);
    assert_eq!(app.vote_screen.category_index, 0);

    app.execute_action(Action::NextScreen);
    app.execute_action(Action::NextCategory);
    assert_eq!(app.delegate_screen.category_index, 2);
    app.execute_action(Action::NextCategory);
    assert_eq!(app.delegate_screen.category_index, 0);
    app.execute_action(Action::PrevCategory);
    assert_eq!(app.delegate_screen.category_index, 2);
}

#[test]
fn test_activity_dialog_merges_screens() {
    let mut app = make_test_app();
    app.execute_action(Action::Decline);
    app.modal_confirm();
    app.execute_action(Action::NextScreen);
    app.execute_action(Action::SwitchDelegate);
    app.modal_confirm();

    app.execute_action(Action::ShowActivity);
    match &app.dialog {
        Some(DialogKind::Activity { entries, .. }) => {
            assert_eq!(entries.len(), 2);
            assert!(entries.iter().any(|e| e.screen == ScreenKind::CastVote));
            assert!(entries.iter().any(|e| e.screen == ScreenKind::DelegateVote));
        }
        _ => panic!("activity dialog not shown"),
    }

    app.close_dialog();
    assert!(app.dialog.is_none());
}

#[test]
fn test_help_dialog_scrolls() {
    let mut app = make_test_app();
    app.execute_action(Action::ShowHelp);
    app.dialog_scroll_down();
    app.dialog_scroll_down();
    app.dialog_scroll_up();
    assert!(matches!(
        app.dialog,
        Some(DialogKind::Help { scroll_offset: 1 })
    ));
}

fn render_dialog(app: &App) -> Buffer {
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    if let Some(kind) = &app.dialog {
        Dialog::new(kind).render(area, &mut buf);
    }
    buf
}

#[test]
fn test_help_scroll_up_after_overscroll_moves_view() {
    let mut app = make_test_app();
    app.layout.update(Rect::new(0, 0, 80, 24));
    app.execute_action(Action::ShowHelp);
    for _ in 0..50 {
        app.dialog_scroll_down();
    }
    let max_offset = match &app.dialog {
        Some(kind) => max_scroll_offset(kind, Rect::new(0, 0, 80, 24)),
        None => panic!("help dialog not shown"),
    };
    assert!(max_offset > 0);
    assert!(matches!(
        app.dialog,
        Some(DialogKind::Help { scroll_offset }) if scroll_offset == max_offset
    ));

    let bottom = render_dialog(&app);
    app.dialog_scroll_up();
    assert_ne!(render_dialog(&app), bottom);
}

#[test]
fn test_about_shows_message() {
    let mut app = make_test_app();
    app.execute_action(Action::About);
    match &app.dialog {
        Some(DialogKind::Message { title, message }) => {
            assert_eq!(title, "About BallotDesk");
            assert!(message.contains(env!("CARGO_PKG_VERSION")));
        }
        _ => panic!("about dialog not shown"),
    }
}

#[test]
fn test_claim_now_only_on_delegate_screen() {
    let mut app = make_test_app();
    app.execute_action(Action::ClaimNow);
    assert_eq!(
        app.toast_display(),
        Some("Claim Now is on the Delegate Vote screen")
    );

    app.execute_action(Action::NextScreen);
    app.execute_action(Action::ClaimNow);
    assert_eq!(app.toast_display(), Some("Claim Now pressed"));
    assert!(!app.is_confirming());
}

#[test]
fn test_open_link_names_focused_target() {
    let mut app = make_test_app();
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("Opened act #1 (教育)"));

    app.execute_action(Action::NextScreen);
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("Opened profile of John Doe"));
}

#[test]
fn test_stat_card_links_and_view_more() {
    let mut app = make_test_app();
    app.execute_action(Action::PrevSection);
    assert_eq!(app.vote_screen.section, Section::Stats);
    assert_eq!(app.focus_label(), "Stat 1/2");
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("Opened stat \"5 votes to cast\""));

    app.execute_action(Action::NextCard);
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("Opened stat \"24 votes casted\""));
    // 통계 카드 이동은 법안 선택과 무관
    assert_eq!(app.vote_screen.selected_card, 0);

    // 통계 카드에서 투표 키는 확인 모달을 열지 않음
    app.execute_action(Action::VoteYes);
    assert!(!app.is_confirming());

    app.execute_action(Action::NextScreen);
    app.execute_action(Action::PrevSection);
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("Opened stat \"18 votes in my hand\""));

    app.execute_action(Action::NextSection);
    app.execute_action(Action::NextSection);
    assert_eq!(app.delegate_screen.section, Section::ReceivedFrom);
    app.execute_action(Action::OpenLink);
    assert_eq!(app.toast_display(), Some("View more: John Smith"));
    assert_eq!(app.committed_count(), 0);
}

#[test]
fn test_command_items_follow_focus() {
    let mut app = make_test_app();
    let enabled = |app: &App, key: &str| {
        app.command_items()
            .into_iter()
            .find(|i| i.key == key)
            .map(|i| i.enabled)
    };
    assert_eq!(enabled(&app, "y"), Some(true));
    assert_eq!(enabled(&app, "s"), Some(false));

    app.execute_action(Action::NextScreen);
    assert_eq!(enabled(&app, "y"), Some(false));
    assert_eq!(enabled(&app, "s"), Some(true));
}

#[test]
fn test_focus_label() {
    let mut app = make_test_app();
    assert_eq!(app.focus_label(), "Act 1/3 · 教育");
    app.execute_action(Action::NextScreen);
    assert_eq!(app.focus_label(), "Auto Delegated to");
}

#[test]
fn test_toast_expires() {
    let mut app = make_test_app();
    app.set_toast("hello");
    assert_eq!(app.toast_display(), Some("hello"));

    app.toast_message = Some((
        "old".to_string(),
        Instant::now() - std::time::Duration::from_secs(5),
    ));
    assert!(app.toast_display().is_none());
    app.clear_expired_toast();
    assert!(app.toast_message.is_none());
}

#[test]
fn test_quit_saves_settings() {
    let mut app = make_test_app();
    let state_path = app.state_store_override.clone().unwrap();
    app.execute_action(Action::NextScreen);
    app.execute_action(Action::Quit);

    assert!(app.should_quit());
    let text = fs::read_to_string(&state_path).unwrap();
    assert!(text.contains("version = 1"));
    assert!(text.contains("theme = \"dark\""));
    assert!(text.contains("last_screen = \"delegate\""));
}

#[test]
fn test_theme_cycle_persists() {
    let mut app = make_test_app();
    let state_path = app.state_store_override.clone().unwrap();
    app.execute_action(Action::CycleTheme);
    assert_eq!(app.current_theme_name(), "light");
    assert_eq!(app.toast_display(), Some("Theme: light"));

    let mut loaded = make_test_app();
    loaded.state_store_override = Some(state_path);
    loaded.load_persisted_state();
    assert_eq!(
        loaded.theme_manager.current().bg_primary.to_color(),
        Color::Rgb(255, 255, 255)
    );
}

#[test]
fn test_load_rejects_other_version() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(
        &path,
        "version = 2\ntheme = \"light\"\nlast_screen = \"delegate\"\n",
    )
    .unwrap();

    let mut app = make_test_app();
    app.state_store_override = Some(path);
    app.load_persisted_state();
    assert_eq!(app.current_theme_name(), "dark");
    assert_eq!(app.current_screen, ScreenKind::CastVote);
}

#[test]
fn test_decode_rejects_empty_theme_and_garbage() {
    assert!(matches!(
        App::decode_app_state("version = 1\ntheme = \"  \"\nlast_screen = \"vote\"\n"),
        Err(BallotDeskError::Config(_))
    ));
    assert!(matches!(
        App::decode_app_state("not toml at all ["),
        Err(BallotDeskError::Settings(_))
    ));
    assert!(matches!(
        App::decode_app_state("version = 3\ntheme = \"dark\"\nlast_screen = \"vote\"\n"),
        Err(BallotDeskError::Config(_))
    ));
    let state =
        App::decode_app_state("version = 1\ntheme = \"high_contrast\"\nlast_screen = \"vote\"\n")
            .unwrap();
    assert_eq!(state.theme, "high_contrast");
}

#[test]
fn test_load_ignores_unknown_theme_and_screen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(
        &path,
        "version = 1\ntheme = \"solarized\"\nlast_screen = \"settings\"\n",
    )
    .unwrap();

    let mut app = make_test_app();
    app.state_store_override = Some(path);
    app.load_persisted_state();
    assert_eq!(app.current_theme_name(), "dark");
    assert_eq!(app.current_screen, ScreenKind::CastVote);
}
