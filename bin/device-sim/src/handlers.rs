//! HTTP request handlers, mounted below the API base URI

pub mod device;
pub mod error;
pub mod fs;
pub mod settings;
pub mod upload_form;

use actix_web::web;

/// Register every endpoint of the device REST API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(fs::list_files)
        .service(fs::read_file)
        .service(fs::write_file)
        .service(fs::remove_file)
        .service(device::display_slots)
        .service(device::sensors)
        .service(settings::get_setting)
        .service(settings::list_settings)
        .service(settings::set_setting);
}
