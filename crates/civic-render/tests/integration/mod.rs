mod dispatch;
mod site;
