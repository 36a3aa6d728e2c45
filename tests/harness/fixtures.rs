use sqlgen::app::settings::FormDefaults;
use sqlgen::app::state::AppState;
use sqlgen::domain::StatementKind;

pub fn orders_defaults(kind: StatementKind) -> FormDefaults {
    FormDefaults {
        table_name: "orders".to_string(),
        columns: "id:int:pk\nqty:int\nsku:text\nat:date\nnote:text\npaid:bool".to_string(),
        sample_values: "7|3|AB-1|2024-01-01|gift|true".to_string(),
        where_clause: "status = 'open'".to_string(),
        limit: 25,
        kind,
    }
}

pub fn orders_state(kind: StatementKind) -> AppState {
    AppState::new(orders_defaults(kind))
}
