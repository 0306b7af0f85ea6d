//! Key table, key resolution and value assignment.
//!
//! Every recognised configuration key maps to exactly one [`Field`]. Each
//! field carries the numeric base its value text is written in and the
//! width/signedness of the record member it lands in. The whole association
//! is declared once in the `key_table!` invocation below; the enum, the
//! lookup table and the record accessors are all generated from it, so a
//! key can never resolve to a field the assigner does not know about.
//!
//! ## Resolution
//!
//! [`resolve`] is an exact, case-sensitive lookup. There is no prefix or
//! fuzzy matching. `dcxo_coarse_and_fine_tune[0]` and
//! `dcxo_coarse_and_fine_tune[1]` are two independent keys that happen to
//! write into the two slots of one array member.
//!
//! ## Assignment
//!
//! [`ConfigRecord::assign`] converts the value text with `strtol` semantics
//! (see [`crate::numeric`]) and narrows the result with a plain `as` cast,
//! so 300 written into an 8-bit field becomes 44 and `-1` becomes 255.
//! Malformed text converts to zero. Assignment never fails.

use crate::numeric::{self, Base};
use crate::record::ConfigRecord;

/// Storage width and signedness of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    I8,
    I32,
}

impl Width {
    /// Number of bits in the target field.
    pub fn bits(self) -> u32 {
        match self {
            Width::U8 | Width::I8 => 8,
            Width::U16 => 16,
            Width::U32 | Width::I32 => 32,
            Width::U64 => 64,
        }
    }

    /// Whether values are sign-extended when read back.
    pub fn is_signed(self) -> bool {
        matches!(self, Width::I8 | Width::I32)
    }
}

/// One row of the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    /// Literal key as it appears in the configuration file.
    pub key: &'static str,
    /// Record field the value is written into.
    pub field: Field,
    /// Base the value text is converted with.
    pub base: Base,
    /// Width of the target member.
    pub width: Width,
}

macro_rules! width_of {
    (u8) => {
        Width::U8
    };
    (u16) => {
        Width::U16
    };
    (u32) => {
        Width::U32
    };
    (u64) => {
        Width::U64
    };
    (i8) => {
        Width::I8
    };
    (i32) => {
        Width::I32
    };
}

macro_rules! key_table {
    ($(
        $variant:ident = $key:literal => $member:ident $([$idx:literal])? : $ty:ident, $base:ident;
    )*) => {
        /// Identifier of one configuration record field.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant,)*
        }

        /// The key table, in declaration order. `KEY_TABLE[f as usize].field == f`.
        pub static KEY_TABLE: &[KeyEntry] = &[
            $(KeyEntry {
                key: $key,
                field: Field::$variant,
                base: Base::$base,
                width: width_of!($ty),
            },)*
        ];

        impl Field {
            /// All field identifiers, in key table order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)*];
        }

        /// Looks up a scanned key. `None` is the "unknown key" sentinel.
        pub fn resolve(key: &str) -> Option<Field> {
            match key {
                $($key => Some(Field::$variant),)*
                _ => None,
            }
        }

        impl ConfigRecord {
            /// Converts `raw` per the field's base and writes it into the field,
            /// truncating to the field's width. No other field is touched.
            pub fn assign(&mut self, field: Field, raw: &str) {
                let value = numeric::parse_long(raw, field.base());
                match field {
                    $(Field::$variant => self.$member $([$idx])? = value as $ty,)*
                }
            }

            /// Reads a field back, sign- or zero-extended to 64 bits.
            pub fn get(&self, field: Field) -> i64 {
                match field {
                    $(Field::$variant => self.$member $([$idx])? as i64,)*
                }
            }
        }
    };
}

key_table! {
    // Identification number
    IdNo = "id_no" => id_no: u8, Dec;

    // Reference Clock
    ReferenceClkRate = "reference_clk_rate" => reference_clk_rate: u32, Dec;

    // Base Configuration
    TwoRxTwoTxModeEnable = "two_rx_two_tx_mode_enable" => two_rx_two_tx_mode_enable: u8, Dec;
    OneRxOneTxModeUseRxNum = "one_rx_one_tx_mode_use_rx_num" => one_rx_one_tx_mode_use_rx_num: u8, Dec;
    OneRxOneTxModeUseTxNum = "one_rx_one_tx_mode_use_tx_num" => one_rx_one_tx_mode_use_tx_num: u8, Dec;
    FrequencyDivisionDuplexModeEnable = "frequency_division_duplex_mode_enable" => frequency_division_duplex_mode_enable: u8, Dec;
    FrequencyDivisionDuplexIndependentModeEnable = "frequency_division_duplex_independent_mode_enable" => frequency_division_duplex_independent_mode_enable: u8, Dec;
    TddUseDualSynthModeEnable = "tdd_use_dual_synth_mode_enable" => tdd_use_dual_synth_mode_enable: u8, Dec;
    TddSkipVcoCalEnable = "tdd_skip_vco_cal_enable" => tdd_skip_vco_cal_enable: u8, Dec;
    TxFastlockDelayNs = "tx_fastlock_delay_ns" => tx_fastlock_delay_ns: u32, Dec;
    RxFastlockDelayNs = "rx_fastlock_delay_ns" => rx_fastlock_delay_ns: u32, Dec;
    RxFastlockPincontrolEnable = "rx_fastlock_pincontrol_enable" => rx_fastlock_pincontrol_enable: u8, Dec;
    TxFastlockPincontrolEnable = "tx_fastlock_pincontrol_enable" => tx_fastlock_pincontrol_enable: u8, Dec;
    ExternalRxLoEnable = "external_rx_lo_enable" => external_rx_lo_enable: u8, Dec;
    ExternalTxLoEnable = "external_tx_lo_enable" => external_tx_lo_enable: u8, Dec;
    DcOffsetTrackingUpdateEventMask = "dc_offset_tracking_update_event_mask" => dc_offset_tracking_update_event_mask: u8, Dec;
    DcOffsetAttenuationHighRange = "dc_offset_attenuation_high_range" => dc_offset_attenuation_high_range: u8, Dec;
    DcOffsetAttenuationLowRange = "dc_offset_attenuation_low_range" => dc_offset_attenuation_low_range: u8, Dec;
    DcOffsetCountHighRange = "dc_offset_count_high_range" => dc_offset_count_high_range: u8, Hex;
    DcOffsetCountLowRange = "dc_offset_count_low_range" => dc_offset_count_low_range: u8, Hex;
    SplitGainTableModeEnable = "split_gain_table_mode_enable" => split_gain_table_mode_enable: u8, Dec;
    TrxSynthesizerTargetFrefOverwriteHz = "trx_synthesizer_target_fref_overwrite_hz" => trx_synthesizer_target_fref_overwrite_hz: u32, Dec;
    QecTrackingSlowModeEnable = "qec_tracking_slow_mode_enable" => qec_tracking_slow_mode_enable: u8, Dec;

    // ENSM Control
    EnsmEnablePinPulseModeEnable = "ensm_enable_pin_pulse_mode_enable" => ensm_enable_pin_pulse_mode_enable: u8, Dec;
    EnsmEnableTxnrxControlEnable = "ensm_enable_txnrx_control_enable" => ensm_enable_txnrx_control_enable: u8, Dec;

    // LO Control
    RxSynthesizerFrequencyHz = "rx_synthesizer_frequency_hz" => rx_synthesizer_frequency_hz: u64, Dec;
    TxSynthesizerFrequencyHz = "tx_synthesizer_frequency_hz" => tx_synthesizer_frequency_hz: u64, Dec;

    // RF Port Control
    RxRfPortInputSelect = "rx_rf_port_input_select" => rx_rf_port_input_select: u32, Dec;
    TxRfPortInputSelect = "tx_rf_port_input_select" => tx_rf_port_input_select: u32, Dec;

    // TX Attenuation Control
    TxAttenuationMdb = "tx_attenuation_mdB" => tx_attenuation_mdb: u32, Dec;
    UpdateTxGainInAlertEnable = "update_tx_gain_in_alert_enable" => update_tx_gain_in_alert_enable: u8, Dec;

    // Reference Clock Control
    XoDisableUseExtRefclkEnable = "xo_disable_use_ext_refclk_enable" => xo_disable_use_ext_refclk_enable: u8, Dec;
    DcxoCoarseTune = "dcxo_coarse_and_fine_tune[0]" => dcxo_coarse_and_fine_tune[0]: u32, Dec;
    DcxoFineTune = "dcxo_coarse_and_fine_tune[1]" => dcxo_coarse_and_fine_tune[1]: u32, Dec;
    ClkOutputModeSelect = "clk_output_mode_select" => clk_output_mode_select: u32, Dec;

    // Gain Control
    GcRx1Mode = "gc_rx1_mode" => gc_rx1_mode: u8, Dec;
    GcRx2Mode = "gc_rx2_mode" => gc_rx2_mode: u8, Dec;
    GcAdcLargeOverloadThresh = "gc_adc_large_overload_thresh" => gc_adc_large_overload_thresh: u8, Dec;
    GcAdcOvrSampleSize = "gc_adc_ovr_sample_size" => gc_adc_ovr_sample_size: u8, Dec;
    GcAdcSmallOverloadThresh = "gc_adc_small_overload_thresh" => gc_adc_small_overload_thresh: u8, Dec;
    GcDecPowMeasurementDuration = "gc_dec_pow_measurement_duration" => gc_dec_pow_measurement_duration: u16, Dec;
    GcDigGainEnable = "gc_dig_gain_enable" => gc_dig_gain_enable: u8, Dec;
    GcLmtOverloadHighThresh = "gc_lmt_overload_high_thresh" => gc_lmt_overload_high_thresh: u16, Dec;
    GcLmtOverloadLowThresh = "gc_lmt_overload_low_thresh" => gc_lmt_overload_low_thresh: u16, Dec;
    GcLowPowerThresh = "gc_low_power_thresh" => gc_low_power_thresh: u8, Dec;
    GcMaxDigGain = "gc_max_dig_gain" => gc_max_dig_gain: u8, Dec;

    // Gain MGC Control
    MgcDecGainStep = "mgc_dec_gain_step" => mgc_dec_gain_step: u8, Dec;
    MgcIncGainStep = "mgc_inc_gain_step" => mgc_inc_gain_step: u8, Dec;
    MgcRx1CtrlInpEnable = "mgc_rx1_ctrl_inp_enable" => mgc_rx1_ctrl_inp_enable: u8, Dec;
    MgcRx2CtrlInpEnable = "mgc_rx2_ctrl_inp_enable" => mgc_rx2_ctrl_inp_enable: u8, Dec;
    MgcSplitTableCtrlInpGainMode = "mgc_split_table_ctrl_inp_gain_mode" => mgc_split_table_ctrl_inp_gain_mode: u8, Dec;

    // Gain AGC Control
    AgcAdcLargeOverloadExceedCounter = "agc_adc_large_overload_exceed_counter" => agc_adc_large_overload_exceed_counter: u8, Dec;
    AgcAdcLargeOverloadIncSteps = "agc_adc_large_overload_inc_steps" => agc_adc_large_overload_inc_steps: u8, Dec;
    AgcAdcLmtSmallOverloadPreventGainIncEnable = "agc_adc_lmt_small_overload_prevent_gain_inc_enable" => agc_adc_lmt_small_overload_prevent_gain_inc_enable: u8, Dec;
    AgcAdcSmallOverloadExceedCounter = "agc_adc_small_overload_exceed_counter" => agc_adc_small_overload_exceed_counter: u8, Dec;
    AgcDigGainStepSize = "agc_dig_gain_step_size" => agc_dig_gain_step_size: u8, Dec;
    AgcDigSaturationExceedCounter = "agc_dig_saturation_exceed_counter" => agc_dig_saturation_exceed_counter: u8, Dec;
    AgcGainUpdateIntervalUs = "agc_gain_update_interval_us" => agc_gain_update_interval_us: u32, Dec;
    AgcImmedGainChangeIfLargeAdcOverloadEnable = "agc_immed_gain_change_if_large_adc_overload_enable" => agc_immed_gain_change_if_large_adc_overload_enable: u8, Dec;
    AgcImmedGainChangeIfLargeLmtOverloadEnable = "agc_immed_gain_change_if_large_lmt_overload_enable" => agc_immed_gain_change_if_large_lmt_overload_enable: u8, Dec;
    AgcInnerThreshHigh = "agc_inner_thresh_high" => agc_inner_thresh_high: u8, Dec;
    AgcInnerThreshHighDecSteps = "agc_inner_thresh_high_dec_steps" => agc_inner_thresh_high_dec_steps: u8, Dec;
    AgcInnerThreshLow = "agc_inner_thresh_low" => agc_inner_thresh_low: u8, Dec;
    AgcInnerThreshLowIncSteps = "agc_inner_thresh_low_inc_steps" => agc_inner_thresh_low_inc_steps: u8, Dec;
    AgcLmtOverloadLargeExceedCounter = "agc_lmt_overload_large_exceed_counter" => agc_lmt_overload_large_exceed_counter: u8, Dec;
    AgcLmtOverloadLargeIncSteps = "agc_lmt_overload_large_inc_steps" => agc_lmt_overload_large_inc_steps: u8, Dec;
    AgcLmtOverloadSmallExceedCounter = "agc_lmt_overload_small_exceed_counter" => agc_lmt_overload_small_exceed_counter: u8, Dec;
    AgcOuterThreshHigh = "agc_outer_thresh_high" => agc_outer_thresh_high: u8, Dec;
    AgcOuterThreshHighDecSteps = "agc_outer_thresh_high_dec_steps" => agc_outer_thresh_high_dec_steps: u8, Dec;
    AgcOuterThreshLow = "agc_outer_thresh_low" => agc_outer_thresh_low: u8, Dec;
    AgcOuterThreshLowIncSteps = "agc_outer_thresh_low_inc_steps" => agc_outer_thresh_low_inc_steps: u8, Dec;
    AgcAttackDelayExtraMarginUs = "agc_attack_delay_extra_margin_us" => agc_attack_delay_extra_margin_us: u32, Dec;
    AgcSyncForGainCounterEnable = "agc_sync_for_gain_counter_enable" => agc_sync_for_gain_counter_enable: u8, Dec;

    // Fast AGC
    FagcDecPowMeasuremntDuration = "fagc_dec_pow_measuremnt_duration" => fagc_dec_pow_measuremnt_duration: u32, Dec;
    FagcStateWaitTimeNs = "fagc_state_wait_time_ns" => fagc_state_wait_time_ns: u32, Dec;

    // Fast AGC - Low Power
    FagcAllowAgcGainIncrease = "fagc_allow_agc_gain_increase" => fagc_allow_agc_gain_increase: u8, Dec;
    FagcLpThreshIncrementTime = "fagc_lp_thresh_increment_time" => fagc_lp_thresh_increment_time: u32, Dec;
    FagcLpThreshIncrementSteps = "fagc_lp_thresh_increment_steps" => fagc_lp_thresh_increment_steps: u32, Dec;

    // Fast AGC - Lock Level
    FagcLockLevelLmtGainIncreaseEn = "fagc_lock_level_lmt_gain_increase_en" => fagc_lock_level_lmt_gain_increase_en: u8, Dec;
    FagcLockLevelGainIncreaseUpperLimit = "fagc_lock_level_gain_increase_upper_limit" => fagc_lock_level_gain_increase_upper_limit: u32, Dec;

    // Fast AGC - Peak Detectors and Final Settling
    FagcLpfFinalSettlingSteps = "fagc_lpf_final_settling_steps" => fagc_lpf_final_settling_steps: u32, Dec;
    FagcLmtFinalSettlingSteps = "fagc_lmt_final_settling_steps" => fagc_lmt_final_settling_steps: u32, Dec;
    FagcFinalOverrangeCount = "fagc_final_overrange_count" => fagc_final_overrange_count: u32, Dec;

    // Fast AGC - Final Power Test
    FagcGainIncreaseAfterGainLockEn = "fagc_gain_increase_after_gain_lock_en" => fagc_gain_increase_after_gain_lock_en: u8, Dec;

    // Fast AGC - Unlocking the Gain
    FagcGainIndexTypeAfterExitRxMode = "fagc_gain_index_type_after_exit_rx_mode" => fagc_gain_index_type_after_exit_rx_mode: u32, Dec;
    FagcUseLastLockLevelForSetGainEn = "fagc_use_last_lock_level_for_set_gain_en" => fagc_use_last_lock_level_for_set_gain_en: u8, Dec;
    FagcRstGlaStrongerSigThreshExceededEn = "fagc_rst_gla_stronger_sig_thresh_exceeded_en" => fagc_rst_gla_stronger_sig_thresh_exceeded_en: u8, Dec;
    FagcOptimizedGainOffset = "fagc_optimized_gain_offset" => fagc_optimized_gain_offset: u32, Dec;
    FagcRstGlaStrongerSigThreshAboveLl = "fagc_rst_gla_stronger_sig_thresh_above_ll" => fagc_rst_gla_stronger_sig_thresh_above_ll: u32, Dec;
    FagcRstGlaEngergyLostSigThreshExceededEn = "fagc_rst_gla_engergy_lost_sig_thresh_exceeded_en" => fagc_rst_gla_engergy_lost_sig_thresh_exceeded_en: u8, Dec;
    FagcRstGlaEngergyLostGotoOptimGainEn = "fagc_rst_gla_engergy_lost_goto_optim_gain_en" => fagc_rst_gla_engergy_lost_goto_optim_gain_en: u8, Dec;
    FagcRstGlaEngergyLostSigThreshBelowLl = "fagc_rst_gla_engergy_lost_sig_thresh_below_ll" => fagc_rst_gla_engergy_lost_sig_thresh_below_ll: u32, Dec;
    FagcEnergyLostStrongerSigGainLockExitCnt = "fagc_energy_lost_stronger_sig_gain_lock_exit_cnt" => fagc_energy_lost_stronger_sig_gain_lock_exit_cnt: u32, Dec;
    FagcRstGlaLargeAdcOverloadEn = "fagc_rst_gla_large_adc_overload_en" => fagc_rst_gla_large_adc_overload_en: u8, Dec;
    FagcRstGlaLargeLmtOverloadEn = "fagc_rst_gla_large_lmt_overload_en" => fagc_rst_gla_large_lmt_overload_en: u8, Dec;
    FagcRstGlaEnAgcPulledHighEn = "fagc_rst_gla_en_agc_pulled_high_en" => fagc_rst_gla_en_agc_pulled_high_en: u8, Dec;
    FagcRstGlaIfEnAgcPulledHighMode = "fagc_rst_gla_if_en_agc_pulled_high_mode" => fagc_rst_gla_if_en_agc_pulled_high_mode: u32, Dec;
    FagcPowerMeasurementDurationInState5 = "fagc_power_measurement_duration_in_state5" => fagc_power_measurement_duration_in_state5: u32, Dec;

    // RSSI Control
    RssiDelay = "rssi_delay" => rssi_delay: u32, Dec;
    RssiDuration = "rssi_duration" => rssi_duration: u32, Dec;
    RssiRestartMode = "rssi_restart_mode" => rssi_restart_mode: u8, Dec;
    RssiUnitIsRxSamplesEnable = "rssi_unit_is_rx_samples_enable" => rssi_unit_is_rx_samples_enable: u8, Dec;
    RssiWait = "rssi_wait" => rssi_wait: u32, Dec;

    // Aux ADC Control
    AuxAdcDecimation = "aux_adc_decimation" => aux_adc_decimation: u32, Dec;
    AuxAdcRate = "aux_adc_rate" => aux_adc_rate: u32, Dec;

    // AuxDAC Control
    AuxDacManualModeEnable = "aux_dac_manual_mode_enable" => aux_dac_manual_mode_enable: u8, Dec;
    AuxDac1DefaultValueMv = "aux_dac1_default_value_mV" => aux_dac1_default_value_mv: u32, Dec;
    AuxDac1ActiveInRxEnable = "aux_dac1_active_in_rx_enable" => aux_dac1_active_in_rx_enable: u8, Dec;
    AuxDac1ActiveInTxEnable = "aux_dac1_active_in_tx_enable" => aux_dac1_active_in_tx_enable: u8, Dec;
    AuxDac1ActiveInAlertEnable = "aux_dac1_active_in_alert_enable" => aux_dac1_active_in_alert_enable: u8, Dec;
    AuxDac1RxDelayUs = "aux_dac1_rx_delay_us" => aux_dac1_rx_delay_us: u32, Dec;
    AuxDac1TxDelayUs = "aux_dac1_tx_delay_us" => aux_dac1_tx_delay_us: u32, Dec;
    AuxDac2DefaultValueMv = "aux_dac2_default_value_mV" => aux_dac2_default_value_mv: u32, Dec;
    AuxDac2ActiveInRxEnable = "aux_dac2_active_in_rx_enable" => aux_dac2_active_in_rx_enable: u8, Dec;
    AuxDac2ActiveInTxEnable = "aux_dac2_active_in_tx_enable" => aux_dac2_active_in_tx_enable: u8, Dec;
    AuxDac2ActiveInAlertEnable = "aux_dac2_active_in_alert_enable" => aux_dac2_active_in_alert_enable: u8, Dec;
    AuxDac2RxDelayUs = "aux_dac2_rx_delay_us" => aux_dac2_rx_delay_us: u32, Dec;
    AuxDac2TxDelayUs = "aux_dac2_tx_delay_us" => aux_dac2_tx_delay_us: u32, Dec;

    // Temperature Sensor Control
    TempSenseDecimation = "temp_sense_decimation" => temp_sense_decimation: u32, Dec;
    TempSenseMeasurementIntervalMs = "temp_sense_measurement_interval_ms" => temp_sense_measurement_interval_ms: u16, Dec;
    TempSenseOffsetSigned = "temp_sense_offset_signed" => temp_sense_offset_signed: i8, Hex;
    TempSensePeriodicMeasurementEnable = "temp_sense_periodic_measurement_enable" => temp_sense_periodic_measurement_enable: u8, Dec;

    // Control Out Setup
    CtrlOutsEnableMask = "ctrl_outs_enable_mask" => ctrl_outs_enable_mask: u8, Hex;
    CtrlOutsIndex = "ctrl_outs_index" => ctrl_outs_index: u8, Hex;

    // External LNA Control
    ElnaSettlingDelayNs = "elna_settling_delay_ns" => elna_settling_delay_ns: u32, Dec;
    ElnaGainMdb = "elna_gain_mdB" => elna_gain_mdb: u32, Dec;
    ElnaBypassLossMdb = "elna_bypass_loss_mdB" => elna_bypass_loss_mdb: u32, Dec;
    ElnaRx1Gpo0ControlEnable = "elna_rx1_gpo0_control_enable" => elna_rx1_gpo0_control_enable: u8, Dec;
    ElnaRx2Gpo1ControlEnable = "elna_rx2_gpo1_control_enable" => elna_rx2_gpo1_control_enable: u8, Dec;
    ElnaGaintableAllIndexEnable = "elna_gaintable_all_index_enable" => elna_gaintable_all_index_enable: u8, Dec;

    // Digital Interface Control
    DigitalInterfaceTuneSkipMode = "digital_interface_tune_skip_mode" => digital_interface_tune_skip_mode: u8, Dec;
    DigitalInterfaceTuneFirDisable = "digital_interface_tune_fir_disable" => digital_interface_tune_fir_disable: u8, Dec;
    PpTxSwapEnable = "pp_tx_swap_enable" => pp_tx_swap_enable: u8, Dec;
    PpRxSwapEnable = "pp_rx_swap_enable" => pp_rx_swap_enable: u8, Dec;
    TxChannelSwapEnable = "tx_channel_swap_enable" => tx_channel_swap_enable: u8, Dec;
    RxChannelSwapEnable = "rx_channel_swap_enable" => rx_channel_swap_enable: u8, Dec;
    RxFramePulseModeEnable = "rx_frame_pulse_mode_enable" => rx_frame_pulse_mode_enable: u8, Dec;
    TwoTTwoRTimingEnable = "two_t_two_r_timing_enable" => two_t_two_r_timing_enable: u8, Dec;
    InvertDataBusEnable = "invert_data_bus_enable" => invert_data_bus_enable: u8, Dec;
    InvertDataClkEnable = "invert_data_clk_enable" => invert_data_clk_enable: u8, Dec;
    FddAltWordOrderEnable = "fdd_alt_word_order_enable" => fdd_alt_word_order_enable: u8, Dec;
    InvertRxFrameEnable = "invert_rx_frame_enable" => invert_rx_frame_enable: u8, Dec;
    FddRxRate2txEnable = "fdd_rx_rate_2tx_enable" => fdd_rx_rate_2tx_enable: u8, Dec;
    SwapPortsEnable = "swap_ports_enable" => swap_ports_enable: u8, Dec;
    SingleDataRateEnable = "single_data_rate_enable" => single_data_rate_enable: u8, Dec;
    LvdsModeEnable = "lvds_mode_enable" => lvds_mode_enable: u8, Dec;
    HalfDuplexModeEnable = "half_duplex_mode_enable" => half_duplex_mode_enable: u8, Dec;
    SinglePortModeEnable = "single_port_mode_enable" => single_port_mode_enable: u8, Dec;
    FullPortEnable = "full_port_enable" => full_port_enable: u8, Dec;
    FullDuplexSwapBitsEnable = "full_duplex_swap_bits_enable" => full_duplex_swap_bits_enable: u8, Dec;
    DelayRxData = "delay_rx_data" => delay_rx_data: u32, Dec;
    RxDataClockDelay = "rx_data_clock_delay" => rx_data_clock_delay: u32, Dec;
    RxDataDelay = "rx_data_delay" => rx_data_delay: u32, Dec;
    TxFbClockDelay = "tx_fb_clock_delay" => tx_fb_clock_delay: u32, Dec;
    TxDataDelay = "tx_data_delay" => tx_data_delay: u32, Dec;
    LvdsBiasMv = "lvds_bias_mV" => lvds_bias_mv: u32, Dec;
    LvdsRxOnchipTerminationEnable = "lvds_rx_onchip_termination_enable" => lvds_rx_onchip_termination_enable: u8, Dec;
    Rx1rx2PhaseInversionEn = "rx1rx2_phase_inversion_en" => rx1rx2_phase_inversion_en: u8, Dec;
    LvdsInvert1Control = "lvds_invert1_control" => lvds_invert1_control: u8, Hex;
    LvdsInvert2Control = "lvds_invert2_control" => lvds_invert2_control: u8, Hex;

    // GPO Control
    Gpo0InactiveStateHighEnable = "gpo0_inactive_state_high_enable" => gpo0_inactive_state_high_enable: u8, Dec;
    Gpo1InactiveStateHighEnable = "gpo1_inactive_state_high_enable" => gpo1_inactive_state_high_enable: u8, Dec;
    Gpo2InactiveStateHighEnable = "gpo2_inactive_state_high_enable" => gpo2_inactive_state_high_enable: u8, Dec;
    Gpo3InactiveStateHighEnable = "gpo3_inactive_state_high_enable" => gpo3_inactive_state_high_enable: u8, Dec;
    Gpo0SlaveRxEnable = "gpo0_slave_rx_enable" => gpo0_slave_rx_enable: u8, Dec;
    Gpo0SlaveTxEnable = "gpo0_slave_tx_enable" => gpo0_slave_tx_enable: u8, Dec;
    Gpo1SlaveRxEnable = "gpo1_slave_rx_enable" => gpo1_slave_rx_enable: u8, Dec;
    Gpo1SlaveTxEnable = "gpo1_slave_tx_enable" => gpo1_slave_tx_enable: u8, Dec;
    Gpo2SlaveRxEnable = "gpo2_slave_rx_enable" => gpo2_slave_rx_enable: u8, Dec;
    Gpo2SlaveTxEnable = "gpo2_slave_tx_enable" => gpo2_slave_tx_enable: u8, Dec;
    Gpo3SlaveRxEnable = "gpo3_slave_rx_enable" => gpo3_slave_rx_enable: u8, Dec;
    Gpo3SlaveTxEnable = "gpo3_slave_tx_enable" => gpo3_slave_tx_enable: u8, Dec;
    Gpo0RxDelayUs = "gpo0_rx_delay_us" => gpo0_rx_delay_us: u8, Dec;
    Gpo0TxDelayUs = "gpo0_tx_delay_us" => gpo0_tx_delay_us: u8, Dec;
    Gpo1RxDelayUs = "gpo1_rx_delay_us" => gpo1_rx_delay_us: u8, Dec;
    Gpo1TxDelayUs = "gpo1_tx_delay_us" => gpo1_tx_delay_us: u8, Dec;
    Gpo2RxDelayUs = "gpo2_rx_delay_us" => gpo2_rx_delay_us: u8, Dec;
    Gpo2TxDelayUs = "gpo2_tx_delay_us" => gpo2_tx_delay_us: u8, Dec;
    Gpo3RxDelayUs = "gpo3_rx_delay_us" => gpo3_rx_delay_us: u8, Dec;
    Gpo3TxDelayUs = "gpo3_tx_delay_us" => gpo3_tx_delay_us: u8, Dec;

    // Tx Monitor Control
    LowHighGainThresholdMdb = "low_high_gain_threshold_mdB" => low_high_gain_threshold_mdb: u32, Dec;
    LowGainDb = "low_gain_dB" => low_gain_db: u32, Dec;
    HighGainDb = "high_gain_dB" => high_gain_db: u32, Dec;
    TxMonTrackEn = "tx_mon_track_en" => tx_mon_track_en: u8, Dec;
    OneShotModeEn = "one_shot_mode_en" => one_shot_mode_en: u8, Dec;
    TxMonDelay = "tx_mon_delay" => tx_mon_delay: u32, Dec;
    TxMonDuration = "tx_mon_duration" => tx_mon_duration: u32, Dec;
    Tx1MonFrontEndGain = "tx1_mon_front_end_gain" => tx1_mon_front_end_gain: u32, Dec;
    Tx2MonFrontEndGain = "tx2_mon_front_end_gain" => tx2_mon_front_end_gain: u32, Dec;
    Tx1MonLoCm = "tx1_mon_lo_cm" => tx1_mon_lo_cm: u32, Dec;
    Tx2MonLoCm = "tx2_mon_lo_cm" => tx2_mon_lo_cm: u32, Dec;

    // GPIO definitions
    GpioResetb = "gpio_resetb" => gpio_resetb: i32, Dec;

    // MCS Sync
    GpioSync = "gpio_sync" => gpio_sync: i32, Dec;
    GpioCalSw1 = "gpio_cal_sw1" => gpio_cal_sw1: i32, Dec;
    GpioCalSw2 = "gpio_cal_sw2" => gpio_cal_sw2: i32, Dec;
}

impl Field {
    fn entry(self) -> &'static KeyEntry {
        &KEY_TABLE[self as usize]
    }

    /// Literal key this field is written under.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Base the value text is written in.
    pub fn base(self) -> Base {
        self.entry().base
    }

    /// Width and signedness of the record member.
    pub fn width(self) -> Width {
        self.entry().width
    }

    /// Shorthand for `self.width().is_signed()`.
    pub fn is_signed(self) -> bool {
        self.width().is_signed()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
