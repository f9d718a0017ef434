// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    branches (branch_id) {
        branch_id -> BigInt,
        name -> Text,
        username -> Text,
        password_hash -> Text,
        is_admin -> Integer,
        kind -> Text,
        last_schedule_transition -> Nullable<Text>,
    }
}

diesel::table! {
    employees (employee_id) {
        employee_id -> BigInt,
        branch_id -> BigInt,
        name -> Text,
        color -> Text,
        departments_json -> Text,
    }
}

diesel::table! {
    schedules (schedule_id) {
        schedule_id -> BigInt,
        branch_id -> BigInt,
        week -> Text,
        days_json -> Text,
        updated_at -> Nullable<Text>,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        token -> Text,
        branch_id -> BigInt,
        created_at -> Text,
        expires_at -> Text,
    }
}

diesel::table! {
    audit_events (event_id) {
        event_id -> BigInt,
        branch -> Text,
        week -> Nullable<Text>,
        actor_json -> Text,
        cause_json -> Text,
        action_json -> Text,
        before_snapshot_json -> Text,
        after_snapshot_json -> Text,
        created_at -> Text,
    }
}

diesel::joinable!(employees -> branches (branch_id));
diesel::joinable!(schedules -> branches (branch_id));
diesel::joinable!(sessions -> branches (branch_id));

diesel::allow_tables_to_appear_in_same_query!(branches, employees, schedules, sessions);
