//! Background particle field.
//!
//! Particles drift at constant velocity and wrap to the opposite edge when
//! they leave the viewport.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            radius: rng.gen_range(1.0..3.0),
            vx: rng.gen_range(-0.5..0.5),
            vy: rng.gen_range(-0.5..0.5),
        }
    }

    fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }
}

/// Folds `v` into `[0, extent)`; a zero or negative extent pins to 0.
pub fn wrap(v: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.0
    } else {
        v.rem_euclid(extent)
    }
}

pub fn count_for(width: f64, height: f64, area_per_particle: f64) -> usize {
    if width <= 0.0 || height <= 0.0 || area_per_particle <= 0.0 {
        return 0;
    }
    (width * height / area_per_particle).floor() as usize
}

pub struct ParticleField<R> {
    width: f64,
    height: f64,
    area_per_particle: f64,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, area_per_particle: f64, rng: R) -> Self {
        let mut field = Self {
            width,
            height,
            area_per_particle,
            particles: Vec::new(),
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let n = count_for(self.width, self.height, self.area_per_particle);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..n).map(|_| Particle::random(rng, w, h)).collect();
    }

    /// Replaces every particle; nothing carries over from the old viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
