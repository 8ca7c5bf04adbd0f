pub trait Environment {
    type State;
    type Action;

    fn state(&self) -> Self::State;
    fn step(&mut self, action: Self::Action) -> Self::State;

    fn done(&self) -> bool;
    fn reset(&mut self);

    fn render(&self) -> String;

    fn reward(&self) -> f64;
}
