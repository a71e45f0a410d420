//! End-to-end scenarios through the store and the shell.

mod common;

use common::{empty_database, seeded_database};
use emptrack::shell::Shell;
use emptrack::store::{departments, employees, roles, Department, NewEmployee};
use std::io::Cursor;

fn run_script(db: &emptrack::core::db::Database, script: &str) -> String {
    let mut output = Vec::new();
    Shell::new(db, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_engineering_scenario() {
    let db = empty_database();
    let conn = db.connection();

    let engineering = departments::add(conn, "Engineering").unwrap();
    let listed = departments::list(conn).unwrap();
    assert!(listed.contains(&Department {
        id: engineering,
        name: "Engineering".to_string()
    }));

    let engineer = roles::add(conn, "Engineer", 90000.0, engineering).unwrap();
    let ada = employees::add(
        conn,
        &NewEmployee {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_id: engineer,
            manager_id: None,
        },
    )
    .unwrap();

    let details = employees::list_details(conn).unwrap();
    let row = details.iter().find(|r| r.id == ada).unwrap();
    assert_eq!(row.title, "Engineer");
    assert_eq!(row.department, "Engineering");
    assert_eq!(row.manager, None);

    let grace = employees::add(
        conn,
        &NewEmployee {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role_id: engineer,
            manager_id: None,
        },
    )
    .unwrap();
    employees::update_manager(conn, ada, Some(grace)).unwrap();

    let reports = employees::by_manager(conn, grace).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, ada);
    assert_eq!(reports[0].first_name, "Ada");

    let details = employees::list_details(conn).unwrap();
    let row = details.iter().find(|r| r.id == ada).unwrap();
    assert_eq!(row.manager.as_deref(), Some("Grace Hopper"));
}

#[test]
fn test_engineering_scenario_through_shell() {
    let db = empty_database();
    let script = "\
4
Engineering
5
Engineer
90000
1
6
Ada
Lovelace
1

6
Grace
Hopper
1

8
1
2
3
9
2
15
";
    let output = run_script(&db, script);

    assert!(output.contains("Department \"Engineering\" added with id 1."));
    assert!(output.contains("Role \"Engineer\" added with id 1."));
    assert!(output.contains("Employee \"Ada Lovelace\" added with id 1."));
    assert!(output.contains("Employee manager updated successfully."));
    assert!(output.contains("Grace Hopper"), "enriched listing shows the manager name");
    assert!(output.contains("1  | Ada        | Lovelace  | 1       | 2"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn test_view_commands_render_tables() {
    let db = seeded_database();
    let output = run_script(&db, "1\n2\n3\n10\n4\n15\n");

    assert!(output.contains("id | name"));
    assert!(output.contains("(4 rows)"));
    assert!(output.contains("(8 rows)"));
    assert!(output.contains("Salesperson"));
    assert!(output.contains("John"));
    assert!(output.contains("Mike"));
    assert!(output.contains("(2 rows)"));
}

#[test]
fn test_blank_manager_update_clears_manager() {
    let db = seeded_database();
    run_script(&db, "8\n2\n\n15\n");
    assert!(employees::by_manager(db.connection(), 1).unwrap().is_empty());
}
