mod helpers;
mod home;
mod login;
mod logout;
mod register;
