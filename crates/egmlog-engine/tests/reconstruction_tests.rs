use egmlog_engine::{RecordExportExt, SummaryRowExt, reconstruct_sessions, summarize};
use egmlog_testing::LogScript;
use egmlog_types::{SessionRecord, SummaryRow};

fn meter(script: LogScript, balance: u32) -> LogScript {
    script.event(&format!("Meters summary: CurrentPlayableAmount={}", balance))
}

/// One full spin: begin, end-of-game summary, gameEnd, then a meter reading.
fn spin(script: LogScript, title: &str, wagered: u32, won: u32, balance_after: u32) -> LogScript {
    let script = script
        .event(&format!("--Beginning game: title={} denom=1", title))
        .event("End of game: #lines=10 bet_per_line=2")
        .event(&format!(
            "sasEngine.gameEnd: amountWagered={} amountWon={}",
            wagered, won
        ));
    meter(script, balance_after)
}

fn render(rows: &[SummaryRow]) -> String {
    rows.iter()
        .map(|row| row.cells().join(" | ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_single_game_balances_and_length() {
    let script = meter(LogScript::new(), 500)
        .step_millis(500)
        .event("--Beginning game: title=Foo denom=25")
        .event("End of game: #lines=20 bet_per_line=1")
        .event("sasEngine.gameEnd: amountWagered=20 amountWon=0")
        .event("Meters summary: CurrentPlayableAmount=480");

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.date, "2024-03-01");
    assert_eq!(row.game_start, "10:00:01,000 AM EST");
    assert_eq!(row.title, "Foo");
    assert_eq!(row.denom, "$0.25");
    assert_eq!(row.line_count, "20");
    assert_eq!(row.bets_per_line, "1");
    assert_eq!(row.starting_balance, "$5.00");
    assert_eq!(row.bet_amount, "$0.20");
    assert_eq!(row.win_amount, "$0.00");
    assert_eq!(row.ending_balance, "$4.80");
    assert_eq!(row.game_end, "10:00:02,000 AM EST");
    assert_eq!(row.time_between_spins, "");
    assert_eq!(row.length_of_game, "00:00:01,000");
    assert_eq!(row.action_type, "");
}

#[test]
fn test_consecutive_games_measure_gap_and_flag_rapid_spin() {
    let script = meter(LogScript::new(), 1000).step_millis(250);
    let script = spin(script, "A", 10, 0, 990);
    let script = spin(script, "B", 10, 50, 1030);

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].time_between_spins, "");
    assert!(!rows[0].is_rapid_spin());

    // gameEnd at +500ms, next begin at +1000ms
    assert_eq!(rows[1].time_between_spins, "00:00:00,500");
    assert!(rows[1].is_rapid_spin());
    assert_eq!(rows[1].length_of_game, "00:00:00,500");
    assert_eq!(rows[1].starting_balance, "$9.90");
    assert_eq!(rows[1].ending_balance, "$10.30");
    assert_eq!(rows[1].win_amount, "$0.50");
}

#[test]
fn test_cash_out_display() {
    let script = meter(LogScript::new(), 1000)
        .event("Cashout initiated.")
        .event("SAS TicketOut request: amt=1000")
        .event("SAS TicketOut response - Success: validation=123456")
        .event("Cashout complete.")
        .event("Meters summary: CurrentPlayableAmount=250");

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.game_start, "10:00:01,000 AM EST");
    assert_eq!(row.starting_balance, "$10.00");
    assert_eq!(row.ending_balance, "$0.00");
    assert_eq!(row.game_end, "10:00:04,000 AM EST");
    assert_eq!(row.action_type, "$10.00 Voucher Cashout, Val-ID: 123456");
    assert_eq!(row.title, "");
}

#[test]
fn test_cash_out_without_completion_is_emitted() {
    let script = meter(LogScript::new(), 700)
        .event("Cashout initiated.")
        .event("SAS TicketOut request: amt=700");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], SessionRecord::CashOut(_)));
    assert!(!records[0].is_complete());

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].game_start, "10:00:01,000 AM EST");
    assert_eq!(rows[0].starting_balance, "$7.00");
    assert_eq!(rows[0].ending_balance, "$0.00");
    assert_eq!(rows[0].game_end, "");
    assert_eq!(rows[0].action_type, "");
}

#[test]
fn test_voucher_without_outcome_keeps_balance() {
    let script = meter(LogScript::new(), 500).event("Ticket inserted: validation#=5");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_complete());

    let row = records[0].to_row("EST");
    assert_eq!(row.starting_balance, "$5.00");
    assert_eq!(row.ending_balance, "$5.00");
    assert_eq!(row.game_end, "");
    assert_eq!(row.action_type, "Voucher Inserted/, Val-ID: 5");
}

#[test]
fn test_rejected_voucher() {
    let script = meter(LogScript::new(), 500)
        .event("Ticket inserted: validation#=9")
        .event("Ticket rejected: reason=expired");

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].starting_balance, "$5.00");
    assert_eq!(rows[0].ending_balance, "$5.00");
    assert_eq!(rows[0].game_end, "10:00:02,000 AM EST");
    assert_eq!(rows[0].action_type, "Voucher Inserted/Rejected, Val-ID: 9");
}

#[test]
fn test_accepted_bill() {
    let script = meter(LogScript::new(), 0)
        .event("Note inserted")
        .event("Note accepted: valueCents=2000");

    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].starting_balance, "$0.00");
    assert_eq!(rows[0].ending_balance, "$20.00");
    assert_eq!(rows[0].action_type, "$20.00 Bill Inserted/Accepted");
}

#[test]
fn test_unfinished_game_is_emitted_blank() {
    let script = meter(LogScript::new(), 500)
        .event("--Beginning game: title=Foo denom=25")
        .event("End of game: #lines=20 bet_per_line=1");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_complete());

    let row = records[0].to_row("EST");
    assert_eq!(row.title, "Foo");
    assert_eq!(row.line_count, "20");
    assert_eq!(row.starting_balance, "$5.00");
    assert_eq!(row.bet_amount, "");
    assert_eq!(row.ending_balance, "");
    assert_eq!(row.game_end, "");
    assert_eq!(row.length_of_game, "");
}

#[test]
fn test_completed_game_without_later_meter_has_blank_ending_balance() {
    let script = meter(LogScript::new(), 500)
        .step_millis(500)
        .event("--Beginning game: title=Foo denom=25")
        .event("End of game: #lines=20 bet_per_line=1")
        .event("sasEngine.gameEnd: amountWagered=20 amountWon=0");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 1);
    assert!(records[0].is_complete());

    let row = records[0].to_row("EST");
    assert_eq!(row.starting_balance, "$5.00");
    assert_eq!(row.bet_amount, "$0.20");
    assert_eq!(row.ending_balance, "");
    assert_eq!(row.game_end, "10:00:02,000 AM EST");
    assert_eq!(row.length_of_game, "00:00:01,000");

    // No meter anywhere: both balances blank
    let script = LogScript::new()
        .event("--Beginning game: title=Foo denom=25")
        .event("sasEngine.gameEnd: amountWagered=20 amountWon=0");
    let rows = summarize(&script.entries(), "EST");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].starting_balance, "");
    assert_eq!(rows[0].ending_balance, "");
    assert_eq!(rows[0].length_of_game, "00:00:01,000");
}

#[test]
fn test_game_without_end_follows_completed_game() {
    let script = LogScript::new().step_millis(250);
    let script = spin(script, "A", 10, 0, 990);
    let script = script.event("--Beginning game: title=Lost denom=1");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 2);
    assert!(records[0].is_complete());
    assert!(!records[1].is_complete());
}

#[test]
fn test_triggers_inside_a_game_are_not_dispatched() {
    let script = meter(LogScript::new(), 500)
        .event("--Beginning game: title=Foo denom=1")
        .event("Cashout initiated.")
        .event("Ticket inserted: validation#=1")
        .event("sasEngine.gameEnd: amountWagered=5 amountWon=0")
        .event("Note inserted")
        .event("Note accepted: valueCents=100");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 2);
    assert!(matches!(records[0], SessionRecord::Game(_)));
    assert!(matches!(records[1], SessionRecord::Insertion(_)));
}

#[test]
fn test_triggers_after_an_unfinished_game_are_consumed() {
    let script = LogScript::new()
        .event("--Beginning game: title=Foo denom=1")
        .event("Cashout initiated.")
        .event("Cashout complete.");

    let records = reconstruct_sessions(&script.entries());
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], SessionRecord::Game(_)));
}

#[test]
fn test_records_follow_trigger_order() {
    let script = meter(LogScript::new(), 0)
        .event("Note inserted")
        .event("Note accepted: valueCents=500")
        .event("Meters summary: CurrentPlayableAmount=500");
    let script = spin(script, "Foo", 100, 0, 400)
        .event("Cashout initiated.")
        .event("SAS TicketOut request: amt=400")
        .event("SAS TicketOut response - Success: validation=77")
        .event("Cashout complete.");

    let rows = summarize(&script.entries(), "EST");

    insta::assert_snapshot!(render(&rows), @r"
    2024-03-01 | 10:00:01,000 AM EST |  |  |  |  | $0.00 |  |  | $5.00 | 10:00:02,000 AM EST |  |  | $5.00 Bill Inserted/Accepted
    2024-03-01 | 10:00:04,000 AM EST | Foo | $0.01 | 10 | 2 | $5.00 | $1.00 | $0.00 | $4.00 | 10:00:06,000 AM EST |  | 00:00:02,000 |
    2024-03-01 | 10:00:08,000 AM EST |  |  |  |  | $4.00 |  |  | $0.00 | 10:00:11,000 AM EST |  |  | $4.00 Voucher Cashout, Val-ID: 77
    ");
}

#[test]
fn test_reconstruction_is_idempotent() {
    let script = meter(LogScript::new(), 1000).step_millis(400);
    let script = spin(script, "A", 10, 0, 990);
    let script = spin(script, "B", 10, 0, 980).event("Ticket inserted: validation#=5");

    let entries = script.entries();
    assert_eq!(summarize(&entries, "UTC"), summarize(&entries, "UTC"));
    assert_eq!(reconstruct_sessions(&entries), reconstruct_sessions(&entries));
}

#[test]
fn test_no_triggers_no_records() {
    let script = meter(LogScript::new(), 500).noise("not a log line");
    assert!(summarize(&script.entries(), "EST").is_empty());
    assert!(summarize(&[], "EST").is_empty());
}
