// Request bodies for the JSON API

use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateUserBody {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGameBody {
    pub point_limit: Option<i64>,
    pub player_names: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct AnswerBody {
    pub card_id: i64,
    pub question_id: i64,
    pub action_type: String,
}

#[derive(Deserialize)]
pub struct CreateQuestionBody {
    pub user_id: Option<i64>,
    pub difficulty: Option<i64>,
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteQuestionBody {
    pub user_id: Option<i64>,
}
