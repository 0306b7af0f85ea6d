//! The configuration record handed to the transceiver initialisation routine.
//!
//! `ConfigRecord` is a flat aggregate of fixed-width integers. Field names
//! follow the initialisation parameters of the device driver so the consumer
//! can copy them across without translation. The groups below follow the
//! layout of the key table in [`crate::keys`].
//!
//! ## Lifecycle
//!
//! The caller allocates a record (every field zero via `Default`), passes it
//! by mutable reference to [`crate::tokenizer::ingest_file`] and
//! [`crate::fir::ingest_fir_file`], then hands the result to the device
//! initialisation. The parsers only ever overwrite fields whose key they
//! recognised; everything else keeps its default.
//!
//! ## FIR-derived fields
//!
//! `rx_path_clock_frequencies`, `tx_path_clock_frequencies`,
//! `rf_rx_bandwidth_hz` and `rf_tx_bandwidth_hz` are not in the key table.
//! They are back-filled from the filter coefficient file.

use serde::{Deserialize, Serialize};

/// Number of entries in a path-clock chain (BBPLL, ADC/DAC, R2/T2, R1/T1, CLK-RF/TF, sample rate).
pub const PATH_CLOCK_COUNT: usize = 6;

/// Operating parameters of the transceiver.
#[allow(missing_docs)] // one field per key, see `keys::Field`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    // Identification number
    pub id_no: u8,

    // Reference Clock
    pub reference_clk_rate: u32,

    // Base Configuration
    pub two_rx_two_tx_mode_enable: u8,
    pub one_rx_one_tx_mode_use_rx_num: u8,
    pub one_rx_one_tx_mode_use_tx_num: u8,
    pub frequency_division_duplex_mode_enable: u8,
    pub frequency_division_duplex_independent_mode_enable: u8,
    pub tdd_use_dual_synth_mode_enable: u8,
    pub tdd_skip_vco_cal_enable: u8,
    pub tx_fastlock_delay_ns: u32,
    pub rx_fastlock_delay_ns: u32,
    pub rx_fastlock_pincontrol_enable: u8,
    pub tx_fastlock_pincontrol_enable: u8,
    pub external_rx_lo_enable: u8,
    pub external_tx_lo_enable: u8,
    pub dc_offset_tracking_update_event_mask: u8,
    pub dc_offset_attenuation_high_range: u8,
    pub dc_offset_attenuation_low_range: u8,
    pub dc_offset_count_high_range: u8,
    pub dc_offset_count_low_range: u8,
    pub split_gain_table_mode_enable: u8,
    pub trx_synthesizer_target_fref_overwrite_hz: u32,
    pub qec_tracking_slow_mode_enable: u8,

    // ENSM Control
    pub ensm_enable_pin_pulse_mode_enable: u8,
    pub ensm_enable_txnrx_control_enable: u8,

    // LO Control
    pub rx_synthesizer_frequency_hz: u64,
    pub tx_synthesizer_frequency_hz: u64,

    // RF Port Control
    pub rx_rf_port_input_select: u32,
    pub tx_rf_port_input_select: u32,

    // TX Attenuation Control
    pub tx_attenuation_mdb: u32,
    pub update_tx_gain_in_alert_enable: u8,

    // Reference Clock Control
    pub xo_disable_use_ext_refclk_enable: u8,
    /// Coarse (index 0) and fine (index 1) DCXO tune words.
    pub dcxo_coarse_and_fine_tune: [u32; 2],
    pub clk_output_mode_select: u32,

    // Gain Control
    pub gc_rx1_mode: u8,
    pub gc_rx2_mode: u8,
    pub gc_adc_large_overload_thresh: u8,
    pub gc_adc_ovr_sample_size: u8,
    pub gc_adc_small_overload_thresh: u8,
    pub gc_dec_pow_measurement_duration: u16,
    pub gc_dig_gain_enable: u8,
    pub gc_lmt_overload_high_thresh: u16,
    pub gc_lmt_overload_low_thresh: u16,
    pub gc_low_power_thresh: u8,
    pub gc_max_dig_gain: u8,

    // Gain MGC Control
    pub mgc_dec_gain_step: u8,
    pub mgc_inc_gain_step: u8,
    pub mgc_rx1_ctrl_inp_enable: u8,
    pub mgc_rx2_ctrl_inp_enable: u8,
    pub mgc_split_table_ctrl_inp_gain_mode: u8,

    // Gain AGC Control
    pub agc_adc_large_overload_exceed_counter: u8,
    pub agc_adc_large_overload_inc_steps: u8,
    pub agc_adc_lmt_small_overload_prevent_gain_inc_enable: u8,
    pub agc_adc_small_overload_exceed_counter: u8,
    pub agc_dig_gain_step_size: u8,
    pub agc_dig_saturation_exceed_counter: u8,
    pub agc_gain_update_interval_us: u32,
    pub agc_immed_gain_change_if_large_adc_overload_enable: u8,
    pub agc_immed_gain_change_if_large_lmt_overload_enable: u8,
    pub agc_inner_thresh_high: u8,
    pub agc_inner_thresh_high_dec_steps: u8,
    pub agc_inner_thresh_low: u8,
    pub agc_inner_thresh_low_inc_steps: u8,
    pub agc_lmt_overload_large_exceed_counter: u8,
    pub agc_lmt_overload_large_inc_steps: u8,
    pub agc_lmt_overload_small_exceed_counter: u8,
    pub agc_outer_thresh_high: u8,
    pub agc_outer_thresh_high_dec_steps: u8,
    pub agc_outer_thresh_low: u8,
    pub agc_outer_thresh_low_inc_steps: u8,
    pub agc_attack_delay_extra_margin_us: u32,
    pub agc_sync_for_gain_counter_enable: u8,

    // Fast AGC
    pub fagc_dec_pow_measuremnt_duration: u32,
    pub fagc_state_wait_time_ns: u32,

    // Fast AGC - Low Power
    pub fagc_allow_agc_gain_increase: u8,
    pub fagc_lp_thresh_increment_time: u32,
    pub fagc_lp_thresh_increment_steps: u32,

    // Fast AGC - Lock Level
    pub fagc_lock_level_lmt_gain_increase_en: u8,
    pub fagc_lock_level_gain_increase_upper_limit: u32,

    // Fast AGC - Peak Detectors and Final Settling
    pub fagc_lpf_final_settling_steps: u32,
    pub fagc_lmt_final_settling_steps: u32,
    pub fagc_final_overrange_count: u32,

    // Fast AGC - Final Power Test
    pub fagc_gain_increase_after_gain_lock_en: u8,

    // Fast AGC - Unlocking the Gain
    pub fagc_gain_index_type_after_exit_rx_mode: u32,
    pub fagc_use_last_lock_level_for_set_gain_en: u8,
    pub fagc_rst_gla_stronger_sig_thresh_exceeded_en: u8,
    pub fagc_optimized_gain_offset: u32,
    pub fagc_rst_gla_stronger_sig_thresh_above_ll: u32,
    pub fagc_rst_gla_engergy_lost_sig_thresh_exceeded_en: u8,
    pub fagc_rst_gla_engergy_lost_goto_optim_gain_en: u8,
    pub fagc_rst_gla_engergy_lost_sig_thresh_below_ll: u32,
    pub fagc_energy_lost_stronger_sig_gain_lock_exit_cnt: u32,
    pub fagc_rst_gla_large_adc_overload_en: u8,
    pub fagc_rst_gla_large_lmt_overload_en: u8,
    pub fagc_rst_gla_en_agc_pulled_high_en: u8,
    pub fagc_rst_gla_if_en_agc_pulled_high_mode: u32,
    pub fagc_power_measurement_duration_in_state5: u32,

    // RSSI Control
    pub rssi_delay: u32,
    pub rssi_duration: u32,
    pub rssi_restart_mode: u8,
    pub rssi_unit_is_rx_samples_enable: u8,
    pub rssi_wait: u32,

    // Aux ADC Control
    pub aux_adc_decimation: u32,
    pub aux_adc_rate: u32,

    // AuxDAC Control
    pub aux_dac_manual_mode_enable: u8,
    pub aux_dac1_default_value_mv: u32,
    pub aux_dac1_active_in_rx_enable: u8,
    pub aux_dac1_active_in_tx_enable: u8,
    pub aux_dac1_active_in_alert_enable: u8,
    pub aux_dac1_rx_delay_us: u32,
    pub aux_dac1_tx_delay_us: u32,
    pub aux_dac2_default_value_mv: u32,
    pub aux_dac2_active_in_rx_enable: u8,
    pub aux_dac2_active_in_tx_enable: u8,
    pub aux_dac2_active_in_alert_enable: u8,
    pub aux_dac2_rx_delay_us: u32,
    pub aux_dac2_tx_delay_us: u32,

    // Temperature Sensor Control
    pub temp_sense_decimation: u32,
    pub temp_sense_measurement_interval_ms: u16,
    pub temp_sense_offset_signed: i8,
    pub temp_sense_periodic_measurement_enable: u8,

    // Control Out Setup
    pub ctrl_outs_enable_mask: u8,
    pub ctrl_outs_index: u8,

    // External LNA Control
    pub elna_settling_delay_ns: u32,
    pub elna_gain_mdb: u32,
    pub elna_bypass_loss_mdb: u32,
    pub elna_rx1_gpo0_control_enable: u8,
    pub elna_rx2_gpo1_control_enable: u8,
    pub elna_gaintable_all_index_enable: u8,

    // Digital Interface Control
    pub digital_interface_tune_skip_mode: u8,
    pub digital_interface_tune_fir_disable: u8,
    pub pp_tx_swap_enable: u8,
    pub pp_rx_swap_enable: u8,
    pub tx_channel_swap_enable: u8,
    pub rx_channel_swap_enable: u8,
    pub rx_frame_pulse_mode_enable: u8,
    pub two_t_two_r_timing_enable: u8,
    pub invert_data_bus_enable: u8,
    pub invert_data_clk_enable: u8,
    pub fdd_alt_word_order_enable: u8,
    pub invert_rx_frame_enable: u8,
    pub fdd_rx_rate_2tx_enable: u8,
    pub swap_ports_enable: u8,
    pub single_data_rate_enable: u8,
    pub lvds_mode_enable: u8,
    pub half_duplex_mode_enable: u8,
    pub single_port_mode_enable: u8,
    pub full_port_enable: u8,
    pub full_duplex_swap_bits_enable: u8,
    pub delay_rx_data: u32,
    pub rx_data_clock_delay: u32,
    pub rx_data_delay: u32,
    pub tx_fb_clock_delay: u32,
    pub tx_data_delay: u32,
    pub lvds_bias_mv: u32,
    pub lvds_rx_onchip_termination_enable: u8,
    pub rx1rx2_phase_inversion_en: u8,
    pub lvds_invert1_control: u8,
    pub lvds_invert2_control: u8,

    // GPO Control
    pub gpo0_inactive_state_high_enable: u8,
    pub gpo1_inactive_state_high_enable: u8,
    pub gpo2_inactive_state_high_enable: u8,
    pub gpo3_inactive_state_high_enable: u8,
    pub gpo0_slave_rx_enable: u8,
    pub gpo0_slave_tx_enable: u8,
    pub gpo1_slave_rx_enable: u8,
    pub gpo1_slave_tx_enable: u8,
    pub gpo2_slave_rx_enable: u8,
    pub gpo2_slave_tx_enable: u8,
    pub gpo3_slave_rx_enable: u8,
    pub gpo3_slave_tx_enable: u8,
    pub gpo0_rx_delay_us: u8,
    pub gpo0_tx_delay_us: u8,
    pub gpo1_rx_delay_us: u8,
    pub gpo1_tx_delay_us: u8,
    pub gpo2_rx_delay_us: u8,
    pub gpo2_tx_delay_us: u8,
    pub gpo3_rx_delay_us: u8,
    pub gpo3_tx_delay_us: u8,

    // Tx Monitor Control
    pub low_high_gain_threshold_mdb: u32,
    pub low_gain_db: u32,
    pub high_gain_db: u32,
    pub tx_mon_track_en: u8,
    pub one_shot_mode_en: u8,
    pub tx_mon_delay: u32,
    pub tx_mon_duration: u32,
    pub tx1_mon_front_end_gain: u32,
    pub tx2_mon_front_end_gain: u32,
    pub tx1_mon_lo_cm: u32,
    pub tx2_mon_lo_cm: u32,

    // GPIO definitions
    pub gpio_resetb: i32,

    // MCS Sync
    pub gpio_sync: i32,
    pub gpio_cal_sw1: i32,
    pub gpio_cal_sw2: i32,

    // Filter path (back-filled from the FIR file)
    pub rx_path_clock_frequencies: [u32; PATH_CLOCK_COUNT],
    pub tx_path_clock_frequencies: [u32; PATH_CLOCK_COUNT],
    pub rf_rx_bandwidth_hz: u32,
    pub rf_tx_bandwidth_hz: u32,
}

impl ConfigRecord {
    /// A record with every field at its zero default.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let record = ConfigRecord::new();
        assert_eq!(record.id_no, 0);
        assert_eq!(record.dcxo_coarse_and_fine_tune, [0, 0]);
        assert_eq!(record.tx_path_clock_frequencies, [0; PATH_CLOCK_COUNT]);
        assert_eq!(record.gpio_resetb, 0);
        assert_eq!(record.temp_sense_offset_signed, 0);
    }

    #[test]
    fn test_partial_yaml_deserialization_uses_defaults() {
        let record: ConfigRecord =
            serde_yaml::from_str("id_no: 3\nrf_tx_bandwidth_hz: 18000000\n").unwrap();
        assert_eq!(record.id_no, 3);
        assert_eq!(record.rf_tx_bandwidth_hz, 18_000_000);
        assert_eq!(record.reference_clk_rate, 0);
    }
}
