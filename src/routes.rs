use crate::{
    api::{attendance, employee, health},
    config::Config,
};
use actix_web::{guard, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/clear, ahead of /{employee_id}; other methods fall through
                    .service(
                        web::resource("/clear")
                            .guard(guard::Post())
                            .route(web::post().to(employee::clear_all)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                    // /attendance/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(attendance::get_attendance)),
                    ),
            )
            .service(web::resource("/_health").route(web::get().to(health::health_check))),
    );
}
