mod attendance;
mod category;
mod event;
mod member;
mod member_status;
mod semester;
