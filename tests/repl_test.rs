//! End-to-end tests of the interactive phonebook session
//!
//! Each test pipes a script of typed lines into the binary and checks the
//! printed output and the resulting Record Files.

mod helpers;

use std::fs;

use predicates::prelude::*;

use helpers::{
    create_custom_csv, create_temp_dir, prepare_phonebook, read_normalized, record_file,
    run_session, BOOK, HEADER,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_list_records() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "r\nq\n")?
        .success()
        .stdout(predicate::str::contains("1. Ann Smith: +100000000000"))
        .stdout(predicate::str::contains("2. Bob Jones: +200000000000"))
        .stdout(predicate::str::contains("3. Cat Brown: +300000000000"))
        .stdout(predicate::str::contains("Goodbye!"));

    Ok(())
}

#[test]
fn test_list_empty_file() -> TestResult {
    let temp_dir = create_temp_dir()?;
    create_custom_csv(temp_dir.path(), BOOK, &record_file(&[]))?;

    run_session(temp_dir.path(), "r\nq\n")?
        .success()
        .stdout(predicate::str::contains("File is empty."));

    Ok(())
}

#[test]
fn test_missing_file_declined() -> TestResult {
    let temp_dir = create_temp_dir()?;

    run_session(temp_dir.path(), "r\nno\nq\n")?
        .success()
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("File is empty.").not());

    assert!(!temp_dir.path().join(BOOK).exists());
    Ok(())
}

#[test]
fn test_missing_file_created_with_header() -> TestResult {
    let temp_dir = create_temp_dir()?;

    run_session(temp_dir.path(), "r\nyes\nq\n")?
        .success()
        .stdout(predicate::str::contains("created"))
        .stdout(predicate::str::contains("File is empty."));

    let contents = read_normalized(&temp_dir.path().join(BOOK));
    assert_eq!(contents, format!("{}\n", HEADER));
    Ok(())
}

#[test]
fn test_append_assigns_next_number() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = create_custom_csv(
        temp_dir.path(),
        BOOK,
        &record_file(&["1,Ann,Smith,+100000000000", "2,Bob,Jones,+200000000000"]),
    )?;

    run_session(temp_dir.path(), "w\nCat\nBrown\n+300000000000\nq\n")?
        .success()
        .stdout(predicate::str::contains("Record 3 saved."));

    assert_eq!(
        read_normalized(&book),
        record_file(&[
            "1,Ann,Smith,+100000000000",
            "2,Bob,Jones,+200000000000",
            "3,Cat,Brown,+300000000000",
        ])
    );
    Ok(())
}

#[test]
fn test_append_reprompts_on_short_values() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = create_custom_csv(temp_dir.path(), BOOK, &record_file(&[]))?;

    let script = "w\nA\nAnn\nLee\nAnn\nSmith\n12345\nAnn\nSmith\n+100000000000\nq\n";
    run_session(temp_dir.path(), script)?
        .success()
        .stdout(predicate::str::contains("First name is too short"))
        .stdout(predicate::str::contains("Last name is too short"))
        .stdout(predicate::str::contains("Phone number is too short"))
        .stdout(predicate::str::contains("Record 1 saved."));

    assert_eq!(
        read_normalized(&book),
        record_file(&["1,Ann,Smith,+100000000000"])
    );
    Ok(())
}

#[test]
fn test_append_to_new_file_after_confirmation() -> TestResult {
    let temp_dir = create_temp_dir()?;

    run_session(temp_dir.path(), "w\nда\nЯн\nИванов\n89001234567\nq\n")?.success();

    assert_eq!(
        read_normalized(&temp_dir.path().join(BOOK)),
        record_file(&["1,Ян,Иванов,89001234567"])
    );
    Ok(())
}

#[test]
fn test_delete_renumbers_rows() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "d\n2 2 9 x\nq\n")?
        .success()
        .stdout(predicate::str::contains("Rows 2 deleted."));

    assert_eq!(
        read_normalized(&book),
        record_file(&["1,Ann,Smith,+100000000000", "2,Cat,Brown,+300000000000"])
    );
    Ok(())
}

#[test]
fn test_delete_several_rows() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "d\n3 1\nq\n")?
        .success()
        .stdout(predicate::str::contains("Rows 3, 1 deleted."));

    assert_eq!(
        read_normalized(&book),
        record_file(&["1,Bob,Jones,+200000000000"])
    );
    Ok(())
}

#[test]
fn test_delete_only_record_leaves_header() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = create_custom_csv(
        temp_dir.path(),
        BOOK,
        &record_file(&["1,Ann,Smith,+100000000000"]),
    )?;

    run_session(temp_dir.path(), "d\n1\nq\n")?.success();

    assert_eq!(read_normalized(&book), record_file(&[]));
    Ok(())
}

#[test]
fn test_delete_without_valid_rows_does_not_write() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = prepare_phonebook(temp_dir.path())?;
    let before = fs::read(&book)?;

    run_session(temp_dir.path(), "d\nabc 0 4 -1\nq\n")?
        .success()
        .stdout(predicate::str::contains("No valid row numbers to delete."));

    assert_eq!(fs::read(&book)?, before);
    Ok(())
}

#[test]
fn test_copy_whole_file() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "c\ncf\nbackup\nq\n")?
        .success()
        .stdout(predicate::str::contains("Records copied from"));

    let backup = temp_dir.path().join("backup.csv");
    assert_eq!(read_normalized(&backup), read_normalized(&book));
    Ok(())
}

#[test]
fn test_copy_rows_into_new_file() -> TestResult {
    let temp_dir = create_temp_dir()?;
    let book = prepare_phonebook(temp_dir.path())?;
    let before = fs::read(&book)?;

    run_session(temp_dir.path(), "c\ncr\nfriends\nyes\n3 1\nq\n")?
        .success()
        .stdout(predicate::str::contains("2 rows copied."));

    assert_eq!(
        read_normalized(&temp_dir.path().join("friends.csv")),
        record_file(&["1,Cat,Brown,+300000000000", "2,Ann,Smith,+100000000000"])
    );
    assert_eq!(fs::read(&book)?, before);
    Ok(())
}

#[test]
fn test_copy_rows_continues_destination_numbering() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;
    let friends = create_custom_csv(
        temp_dir.path(),
        "friends.csv",
        &record_file(&["1,Zoe,Adams,+900000000000"]),
    )?;

    run_session(temp_dir.path(), "C\nCR\nfriends\n2 2\nq\n")?.success();

    assert_eq!(
        read_normalized(&friends),
        record_file(&[
            "1,Zoe,Adams,+900000000000",
            "2,Bob,Jones,+200000000000",
            "3,Bob,Jones,+200000000000",
        ])
    );
    Ok(())
}

#[test]
fn test_copy_rows_destination_declined() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "c\ncr\nfriends\nno\nq\n")?
        .success()
        .stdout(predicate::str::contains("rows copied").not());

    assert!(!temp_dir.path().join("friends.csv").exists());
    Ok(())
}

#[test]
fn test_copy_rows_without_valid_rows() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;
    let friends = create_custom_csv(temp_dir.path(), "friends.csv", &record_file(&[]))?;

    run_session(temp_dir.path(), "c\ncr\nfriends\n7\nq\n")?
        .success()
        .stdout(predicate::str::contains("No valid row numbers to copy."));

    assert_eq!(read_normalized(&friends), record_file(&[]));
    Ok(())
}

#[test]
fn test_copy_invalid_mode() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "c\nzz\nq\n")?
        .success()
        .stdout(predicate::str::contains("Invalid command, please try again."));

    Ok(())
}

#[test]
fn test_find_by_phone_number() -> TestResult {
    let temp_dir = create_temp_dir()?;
    create_custom_csv(
        temp_dir.path(),
        BOOK,
        &record_file(&[
            "1,Ann,Smith,+100000000000",
            "2,Bob,Jones,+200000000000",
            "3,Dan,Green,+100000000000",
        ]),
    )?;

    run_session(temp_dir.path(), "f\nphone_number\n+100000000000\nq\n")?
        .success()
        .stdout(predicate::str::contains("1. Ann Smith: +100000000000"))
        .stdout(predicate::str::contains("3. Dan Green: +100000000000"))
        .stdout(predicate::str::contains("Bob Jones").not());

    Ok(())
}

#[test]
fn test_find_by_number_with_several_targets() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "f\n№\n1 3\nq\n")?
        .success()
        .stdout(predicate::str::contains("1. Ann Smith"))
        .stdout(predicate::str::contains("3. Cat Brown"))
        .stdout(predicate::str::contains("2. Bob Jones").not());

    Ok(())
}

#[test]
fn test_find_not_found() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "f\nfirst_name\nNobody\nq\n")?
        .success()
        .stdout(predicate::str::contains("Record not found."));

    Ok(())
}

#[test]
fn test_find_invalid_field() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "f\nname\nq\n")?
        .success()
        .stdout(predicate::str::contains("Invalid search field."));

    Ok(())
}

#[test]
fn test_unknown_command_reprompts() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "x\nr\nq\n")?
        .success()
        .stdout(predicate::str::contains("Invalid command, please try again."))
        .stdout(predicate::str::contains("1. Ann Smith"));

    Ok(())
}

#[test]
fn test_end_of_input_exits_cleanly() -> TestResult {
    let temp_dir = create_temp_dir()?;
    prepare_phonebook(temp_dir.path())?;

    run_session(temp_dir.path(), "r\n")?
        .success()
        .stdout(predicate::str::contains("Goodbye!").not());

    Ok(())
}

#[test]
fn test_malformed_file_is_reported_and_session_continues() -> TestResult {
    let temp_dir = create_temp_dir()?;
    create_custom_csv(temp_dir.path(), BOOK, "name,phone\nAnn,123\n")?;

    run_session(temp_dir.path(), "r\nq\n")?
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Goodbye!"));

    Ok(())
}
