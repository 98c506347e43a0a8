
mod test_player;
mod test_route;
