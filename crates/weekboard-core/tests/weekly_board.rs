use std::sync::Arc;

use chrono::NaiveDate;
use weekboard_core::app::{BoardBuilder, sign_in};
use weekboard_core::domain::{Alignment, ColorToken, Corners, DayStatus, EmployeeId, RunShape};
use weekboard_core::impls::JsonFileStore;
use weekboard_core::ports::FixedClock;

const DATA: &str = r#"{
  "employees": [
    { "id": "u1", "firstName": "Ana", "lastName": "Lopez", "positionId": "dev",
      "companyName": "Acme", "role": "1",
      "schedule": { "2024-03-04": "TT", "2024-03-05": "TT", "2024-03-07": "ABSENT" } },
    { "id": "u2", "firstName": "Ben", "lastName": "Okafor", "companyName": "Acme", "role": "3",
      "schedule": { "2024-03-06": "ABSENT", "2024-03-05": null, "2024-03-07": null } },
    { "id": "u3", "firstName": "Cleo", "lastName": "Martin", "companyName": "Globex",
      "schedule": {} }
  ],
  "positions": [ { "id": "dev", "title": "Developer", "categoryId": "eng" } ],
  "categories": [ { "id": "eng", "name": "Engineering" } ]
}"#;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[tokio::test]
async fn weekly_board_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, DATA).unwrap();

    let store = Arc::new(JsonFileStore::open(&path).await.unwrap());
    let session = sign_in(store.as_ref(), &EmployeeId::new("u1")).await.unwrap();
    let mut board = BoardBuilder::new(session)
        .store(store.clone())
        .clock(FixedClock::new(date(6)))
        .build()
        .unwrap()
        .load()
        .await
        .unwrap();

    let view = board.view(None);
    assert_eq!(view.label, "4 Mar - 10 Mar 2024");
    let names: Vec<&str> = view.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Uncategorized", "Engineering"]);

    // 月 TT, 火 TT, 水 -, 木 ABSENT
    let ana = view.row(&EmployeeId::new("u1")).unwrap();
    assert!(ana.editable);
    assert_eq!(ana.display_name, "Ana L.");
    let shapes: Vec<RunShape> = ana.cells.iter().map(|c| c.style.shape).collect();
    assert_eq!(
        shapes,
        vec![
            RunShape::Start,
            RunShape::End,
            RunShape::Empty,
            RunShape::Isolated,
            RunShape::Empty,
            RunShape::Empty,
            RunShape::Empty,
        ]
    );
    assert_eq!(ana.cells[0].style.width_percent, 75);
    assert_eq!(ana.cells[0].style.alignment, Alignment::End);
    assert_eq!(ana.cells[0].style.corners, Corners::LEADING);
    assert_eq!(ana.cells[1].style.alignment, Alignment::Start);
    assert_eq!(ana.cells[1].style.corners, Corners::TRAILING);
    assert_eq!(ana.cells[3].style.width_percent, 50);
    assert_eq!(ana.cells[3].style.color, ColorToken::Pink);

    // 水曜だけ ABSENT、null は空として扱う
    let ben = view.row(&EmployeeId::new("u2")).unwrap();
    assert!(!ben.editable);
    assert_eq!(ben.cells[2].style.shape, RunShape::Isolated);
    assert_eq!(ben.cells[2].style.corners, Corners::ALL);
    assert_eq!(ben.cells[2].style.color, ColorToken::Pink);

    // 水曜のクリックで月〜火の run が伸び、木曜は単独のまま
    let me = EmployeeId::new("u1");
    assert_eq!(
        board.click(&me, date(6)).await.unwrap(),
        Some(DayStatus::Teleworking)
    );
    let ana = board.view(None).row(&me).cloned().unwrap();
    assert_eq!(ana.cells[0].style.shape, RunShape::Start);
    assert_eq!(ana.cells[1].style.shape, RunShape::Interior);
    assert_eq!(ana.cells[2].style.shape, RunShape::End);
    assert_eq!(ana.cells[3].style.shape, RunShape::Isolated);

    board.fill_range(date(11), date(13), DayStatus::Absent).await.unwrap();
    drop(board);

    // ディスクに残っている
    let reopened = Arc::new(JsonFileStore::open(&path).await.unwrap());
    let session = sign_in(reopened.as_ref(), &me).await.unwrap();
    let mut board = BoardBuilder::new(session)
        .store(reopened)
        .clock(FixedClock::new(date(6)))
        .build()
        .unwrap()
        .load()
        .await
        .unwrap();
    let schedule = board.schedule_of(&me).unwrap();
    assert_eq!(schedule.status_on(date(6)), DayStatus::Teleworking);
    assert_eq!(schedule.status_on(date(12)), DayStatus::Absent);

    board.next_week().unwrap();
    let next = board.view(None);
    let ana = next.row(&me).unwrap();
    assert_eq!(ana.cells[0].style.shape, RunShape::Start);
    assert_eq!(ana.cells[2].style.shape, RunShape::End);
    assert_eq!(next.today_column(), None);
}
