use crate::{DataProvider, InvalidMove, MoveOutcome};

use actix_web::{
    web::{Bytes, Data},
    HttpResponse,
};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

#[derive(Serialize, Debug)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InvalidMove>,
}

impl Failure {
    fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            kind: None,
        }
    }

    fn rejected(invalid_move: InvalidMove) -> Self {
        Self {
            success: false,
            error: invalid_move.to_string(),
            kind: Some(invalid_move),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct Placed {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: MoveOutcome,
}

#[derive(Serialize, Debug)]
pub struct Confirmation {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Deserialize, Default)]
pub struct MoveRequest {
    column: Option<Value>,
}

fn provider_error(err: impl Display) -> HttpResponse {
    error!("data provider failed: {}", err);
    HttpResponse::InternalServerError().json(Failure::new(err))
}

/// Any integer is passed on to the game, which decides whether it is a column.
fn parse_column(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|_| i64::MAX))
}

pub async fn get_state<T: DataProvider + 'static>(games: Data<T>) -> HttpResponse {
    match games.get_game_state() {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(err) => provider_error(err),
    }
}

pub async fn get_valid_moves<T: DataProvider + 'static>(games: Data<T>) -> HttpResponse {
    match games.get_valid_moves() {
        Ok(valid_moves) => HttpResponse::Ok().json(valid_moves),
        Err(err) => provider_error(err),
    }
}

pub async fn make_move<T: DataProvider + 'static>(games: Data<T>, body: Bytes) -> HttpResponse {
    // a body that is not a json object is treated like one without a column
    let request = serde_json::from_slice::<MoveRequest>(&body).unwrap_or_default();

    let Some(value) = request.column else {
        debug!("move request without a column");
        return HttpResponse::BadRequest().json(Failure::new("Column not specified"));
    };
    let Some(column) = parse_column(&value) else {
        debug!("move request with a non integer column: {}", value);
        return HttpResponse::BadRequest().json(Failure::new("Column must be an integer"));
    };

    match games.drop_piece(column) {
        Ok(Ok(outcome)) => HttpResponse::Ok().json(Placed {
            success: true,
            outcome,
        }),
        Ok(Err(invalid_move)) => HttpResponse::Ok().json(Failure::rejected(invalid_move)),
        Err(err) => provider_error(err),
    }
}

pub async fn reset_game<T: DataProvider + 'static>(games: Data<T>) -> HttpResponse {
    match games.reset() {
        Ok(()) => HttpResponse::Ok().json(Confirmation {
            success: true,
            message: "Game reset",
        }),
        Err(err) => provider_error(err),
    }
}
