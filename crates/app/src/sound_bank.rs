//! Procedurally synthesized audio. Every track is rendered to an in-memory
//! WAV at startup and played through `macroquad::audio`; nothing is loaded
//! from disk. A failed audio backend disables the whole bank and the game
//! keeps running silently.

use std::collections::HashMap;
use std::f32::consts::TAU;

use core::{AmbientKey, AudioEvent};
use macroquad::audio::{
    PlaySoundParams, Sound, load_sound_from_bytes, play_sound, play_sound_once, stop_sound,
};
use macroquad::logging::warn;

const SAMPLE_RATE: u32 = 22_050;
const AMBIENT_SECONDS: f32 = 3.0;
const CHASE_SECONDS: f32 = 2.0;

const AMBIENT_VOLUME: f32 = 0.6;
const CHASE_VOLUME: f32 = 0.8;

const ALL_AMBIENT_KEYS: [AmbientKey; 8] = [
    AmbientKey::Home,
    AmbientKey::Park,
    AmbientKey::Friend,
    AmbientKey::Theater,
    AmbientKey::Garden,
    AmbientKey::Forest,
    AmbientKey::Lake,
    AmbientKey::End,
];

pub struct SoundBank {
    inner: Option<LoadedBank>,
}

impl SoundBank {
    pub async fn load() -> SoundBank {
        match LoadedBank::load().await {
            Ok(bank) => SoundBank { inner: Some(bank) },
            Err(message) => {
                warn!("audio disabled: {}", message);
                SoundBank { inner: None }
            }
        }
    }

    /// A bank that never plays anything; used by headless callers.
    pub fn disabled() -> SoundBank {
        SoundBank { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub fn handle(&mut self, event: AudioEvent) {
        if let Some(bank) = &mut self.inner {
            bank.handle(event);
        }
    }
}

struct LoadedBank {
    ambient: HashMap<AmbientKey, Sound>,
    chase: Sound,
    interaction: Sound,
    location_change: Sound,
    damage: Sound,
    /// At most one ambient track is audible; this is its key.
    current_ambient: Option<AmbientKey>,
    chase_active: bool,
}

impl LoadedBank {
    async fn load() -> Result<LoadedBank, String> {
        let mut ambient = HashMap::new();
        for key in ALL_AMBIENT_KEYS {
            ambient.insert(key, decode(&ambient_samples(key)).await?);
        }
        Ok(LoadedBank {
            ambient,
            chase: decode(&chase_samples()).await?,
            interaction: decode(&tone(440.0, 0.2, Waveform::Sine)).await?,
            location_change: decode(&sweep(200.0, 400.0, 0.5)).await?,
            damage: decode(&tone(150.0, 0.3, Waveform::Sawtooth)).await?,
            current_ambient: None,
            chase_active: false,
        })
    }

    fn handle(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Ambient(key) => self.switch_ambient(key),
            AudioEvent::ChaseStarted => {
                if !self.chase_active {
                    self.chase_active = true;
                    self.stop_current_ambient();
                    play_sound(
                        &self.chase,
                        PlaySoundParams { looped: true, volume: CHASE_VOLUME },
                    );
                }
            }
            AudioEvent::ChaseStopped => {
                if self.chase_active {
                    self.chase_active = false;
                    stop_sound(&self.chase);
                    self.resume_current_ambient();
                }
            }
            AudioEvent::Interaction => play_sound_once(&self.interaction),
            AudioEvent::LocationChange => play_sound_once(&self.location_change),
            AudioEvent::Damage => play_sound_once(&self.damage),
        }
    }

    fn switch_ambient(&mut self, key: AmbientKey) {
        if self.current_ambient == Some(key) {
            return;
        }
        self.stop_current_ambient();
        self.current_ambient = Some(key);
        // While the chase track runs the new key is only remembered.
        if !self.chase_active {
            self.resume_current_ambient();
        }
    }

    fn stop_current_ambient(&self) {
        if let Some(sound) = self.current_ambient.and_then(|key| self.ambient.get(&key)) {
            stop_sound(sound);
        }
    }

    fn resume_current_ambient(&self) {
        if let Some(sound) = self.current_ambient.and_then(|key| self.ambient.get(&key)) {
            play_sound(sound, PlaySoundParams { looped: true, volume: AMBIENT_VOLUME });
        }
    }
}

async fn decode(samples: &[f32]) -> Result<Sound, String> {
    load_sound_from_bytes(&wav_bytes(samples)).await.map_err(|error| format!("{error:?}"))
}

enum Waveform {
    Sine,
    Sawtooth,
}

/// Deterministic texture noise; the audible grit does not need the
/// simulation RNG.
struct Noise(u32);

impl Noise {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.0 >> 8) as f32 * (1.0 / 16_777_216.0)
    }
}

fn sample_count(seconds: f32) -> usize {
    (SAMPLE_RATE as f32 * seconds) as usize
}

/// Per-key looping ambience. The recipes are soft sine mixes with a little
/// noise for the outdoor areas.
fn ambient_samples(key: AmbientKey) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    let mut noise = Noise(0x5eed);
    (0..sample_count(AMBIENT_SECONDS))
        .map(|i| {
            let phase = |freq: f32| (TAU * freq * i as f32 / rate).sin();
            let sample = match key {
                AmbientKey::Home => phase(220.0) * 0.05 + phase(110.0) * 0.03,
                AmbientKey::Park => phase(330.0) * 0.04 + noise.next() * 0.02 - 0.01,
                AmbientKey::Forest => {
                    phase(80.0) * 0.06 + phase(160.0) * 0.03 + noise.next() * 0.03 - 0.015
                }
                AmbientKey::Lake => {
                    let warble = 200.0 * (1.0 + (i as f32 / 1000.0).sin());
                    phase(100.0) * 0.05 + (TAU * warble * i as f32 / rate).sin() * 0.04
                }
                AmbientKey::Theater => phase(60.0) * 0.03,
                AmbientKey::Garden => phase(440.0) * 0.02 + phase(220.0) * 0.04,
                AmbientKey::Friend | AmbientKey::End => phase(200.0) * 0.03,
            };
            sample * (0.8 + noise.next() * 0.4)
        })
        .collect()
}

/// Low dissonant stack with a wandering high overtone and noise.
fn chase_samples() -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    let mut noise = Noise(0xc4a5e);
    (0..sample_count(CHASE_SECONDS))
        .map(|i| {
            let phase = |freq: f32| (TAU * freq * i as f32 / rate).sin();
            let mut sample = phase(55.0) * 0.15
                + phase(85.0) * 0.12
                + phase(110.0) * 0.08
                + phase(165.0) * 0.06;
            let wander = 880.0 * (1.0 + (i as f32 / 800.0).sin());
            sample += (TAU * wander * i as f32 / rate).sin() * 0.08;
            sample += noise.next() * 0.1 - 0.05;
            sample * (0.7 + noise.next() * 0.3)
        })
        .collect()
}

/// One-shot effect with an exponential fade-out.
fn tone(frequency: f32, seconds: f32, waveform: Waveform) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    (0..sample_count(seconds))
        .map(|i| {
            let t = i as f32 / rate;
            let sample = match waveform {
                Waveform::Sine => (TAU * frequency * t).sin(),
                Waveform::Sawtooth => 2.0 * (frequency * t - (frequency * t + 0.5).floor()),
            };
            sample * (-t * 3.0).exp() * 0.3
        })
        .collect()
}

/// Linear frequency sweep with a fade-out; the location-change cue.
fn sweep(start_freq: f32, end_freq: f32, seconds: f32) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    (0..sample_count(seconds))
        .map(|i| {
            let t = i as f32 / rate;
            let progress = t / seconds;
            let frequency = start_freq + (end_freq - start_freq) * progress;
            (TAU * frequency * t).sin() * (-t * 2.0).exp() * 0.2
        })
        .collect()
}

/// 16-bit mono PCM WAV encoding.
fn wav_bytes(samples: &[f32]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16_u32.to_le_bytes());
    bytes.extend_from_slice(&1_u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1_u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2_u16.to_le_bytes());
    bytes.extend_from_slice(&16_u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        bytes.extend_from_slice(&quantized.to_le_bytes());
    }
    bytes
}
