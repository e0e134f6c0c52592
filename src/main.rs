fn main() -> std::io::Result<()> {
    liftsim::modules::run()
}
