use crate::database::{connection::DatabaseManager, models::Person};
use crate::error::BotError;
use crate::utils::{
    feedback::Reply,
    logging::log_missing_record,
    validation::{join_args, require_args, validate_birthday, validate_record_id},
};

pub const ADD_USAGE: &str =
    "Используйте: /add Имя Фамилия День_рождения (YYYY-MM-DD) [Текст поздравления]";
pub const DELETE_USAGE: &str = "Используйте: /delete ID_пользователя";
pub const EDIT_USAGE: &str =
    "Используйте: /edit ID_пользователя Имя Фамилия День_рождения (YYYY-MM-DD)";
pub const SETTEXT_USAGE: &str = "Используйте: /settext ID_пользователя Текст поздравления";

pub const EMPTY_LIST: &str = "Список пользователей пуст.";

pub async fn handle_add(db: &DatabaseManager, args: &[&str]) -> Result<Reply, BotError> {
    require_args(args, 3, ADD_USAGE)?;

    let (first_name, last_name) = (args[0], args[1]);
    let birthday = validate_birthday(args[2])?;
    let congratulation_text = join_args(&args[3..]);

    let id = Person::create(
        &db.pool,
        first_name,
        last_name,
        &birthday,
        congratulation_text.as_deref(),
    )
    .await?;

    Ok(Reply::success(format!(
        "Пользователь {first_name} {last_name} добавлен! ID: {id}"
    )))
}

/// Confirms even when nothing was deleted.
pub async fn handle_delete(db: &DatabaseManager, args: &[&str]) -> Result<Reply, BotError> {
    require_args(args, 1, DELETE_USAGE)?;
    let id = validate_record_id(args[0])?;

    if Person::delete(&db.pool, id).await? == 0 {
        log_missing_record("delete", id);
    }

    Ok(Reply::success(format!("Пользователь с ID {id} удалён.")))
}

pub async fn handle_edit(db: &DatabaseManager, args: &[&str]) -> Result<Reply, BotError> {
    require_args(args, 4, EDIT_USAGE)?;
    let id = validate_record_id(args[0])?;
    let (first_name, last_name) = (args[1], args[2]);
    let birthday = validate_birthday(args[3])?;

    if Person::update(&db.pool, id, first_name, last_name, &birthday).await? == 0 {
        log_missing_record("edit", id);
    }

    Ok(Reply::success(format!(
        "Данные пользователя с ID {id} обновлены: {first_name} {last_name}, {birthday}."
    )))
}

/// Replaces any previous text; never appends.
pub async fn handle_set_text(db: &DatabaseManager, args: &[&str]) -> Result<Reply, BotError> {
    require_args(args, 2, SETTEXT_USAGE)?;
    let id = validate_record_id(args[0])?;
    let text = args[1..].join(" ");

    if Person::set_text(&db.pool, id, &text).await? == 0 {
        log_missing_record("settext", id);
    }

    Ok(Reply::success(format!(
        "Текст поздравления для пользователя с ID {id} обновлён."
    )))
}

pub async fn handle_list(db: &DatabaseManager) -> Result<Reply, BotError> {
    let people = Person::list_all(&db.pool).await?;
    Ok(Reply::info(format_people_list(&people)))
}

pub fn format_people_list(people: &[Person]) -> String {
    if people.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let lines: Vec<String> = people
        .iter()
        .map(|p| format!("ID: {}, Имя: {} {}, ДР: {}", p.id, p.first_name, p.last_name, p.birthday))
        .collect();

    format!("Список пользователей:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, first: &str, last: &str, birthday: &str) -> Person {
        Person {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            birthday: birthday.to_string(),
            telegram_id: None,
            photo_file_id: None,
            congratulation_text: None,
        }
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_people_list(&[]), EMPTY_LIST);
    }

    #[test]
    fn test_list_line_format() {
        let people = vec![
            person(1, "Anna", "Lee", "2024-05-10"),
            person(3, "Иван", "Петров", "1990-12-31"),
        ];
        assert_eq!(
            format_people_list(&people),
            "Список пользователей:\nID: 1, Имя: Anna Lee, ДР: 2024-05-10\nID: 3, Имя: Иван Петров, ДР: 1990-12-31"
        );
    }
}
