mod create_reminder;
mod delete_reminder;
mod delete_reminders;
mod get_expired_reminders;
mod get_reminder;
mod get_reminders;
mod update_reminder;

use actix_web::web;
use create_reminder::{create_reminder_date_controller, create_reminder_days_controller};
use delete_reminder::{delete_reminder_confirmation_controller, delete_reminder_controller};
use delete_reminders::{delete_reminders_confirmation_controller, delete_reminders_controller};
use get_expired_reminders::get_expired_reminders_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use update_reminder::{update_reminder_date_controller, update_reminder_days_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/reminders/expired",
        web::get().to(get_expired_reminders_controller),
    );
    cfg.route(
        "/reminders/date",
        web::post().to(create_reminder_date_controller),
    );
    cfg.route(
        "/reminders/days",
        web::post().to(create_reminder_days_controller),
    );

    // Registered before the parameterized routes below so that these
    // segments are never matched as a reminder id.
    cfg.route(
        "/reminders/delete",
        web::get().to(delete_reminders_confirmation_controller),
    );
    cfg.route(
        "/reminders/delete",
        web::post().to(delete_reminders_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/date",
        web::put().to(update_reminder_date_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/days",
        web::put().to(update_reminder_days_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/delete",
        web::get().to(delete_reminder_confirmation_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/delete",
        web::post().to(delete_reminder_controller),
    );
}
